use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use common::export::{copy_text, mailto_url, to_eml, to_html, Message};
use common::requests::ExportRequest;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Eml,
    Html,
    Mailto,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ExportFormat::Text),
            "eml" => Ok(ExportFormat::Eml),
            "html" => Ok(ExportFormat::Html),
            "mailto" => Ok(ExportFormat::Mailto),
            other => Err(format!("Unsupported export format: {}", other)),
        }
    }
}

/// Actix web handler for `POST /api/export/{format}`.
///
/// # Returns
/// - `200 OK` with the exported document and its content type.
/// - `400 Bad Request` for an unknown format.
pub async fn process(format: web::Path<String>, payload: web::Json<ExportRequest>) -> impl Responder {
    let format = match format.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };
    let request = payload.into_inner();
    let message = Message {
        subject: request.subject,
        body: request.body,
    };

    match format {
        ExportFormat::Text => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(copy_text(request.target, &message)),
        ExportFormat::Eml => HttpResponse::Ok()
            .content_type("message/rfc822")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename("draft.eml".to_string())],
            })
            .body(to_eml(&message, request.language, Utc::now())),
        ExportFormat::Html => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(to_html(&message, request.language)),
        ExportFormat::Mailto => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(mailto_url(&message)),
    }
}
