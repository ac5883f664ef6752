//! # Template Retrieval Service
//!
//! Backs `GET /api/templates/{template_id}`: looks the id up in the shared
//! catalog and returns the template with both languages.

use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

/// # Returns
/// - `200 OK` with the `Template` as JSON.
/// - `404 Not Found` with the lookup error when the id is unknown.
pub async fn process(state: web::Data<AppState>, template_id: web::Path<String>) -> impl Responder {
    match state.catalog.get(&template_id) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
    }
}
