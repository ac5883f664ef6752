use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::engine::{annotate, diverges};
use common::requests::{AnnotateDraftRequest, DraftResponse};

/// Actix web handler for `POST /api/drafts/annotate`.
///
/// Divergent edits are not an error: the unaligned tail comes back as plain
/// spans.
///
/// # Returns
/// - `200 OK` with a `DraftResponse` echoing the texts and variables.
/// - `404 Not Found` when the template id is unknown.
pub async fn process(state: web::Data<AppState>, payload: web::Json<AnnotateDraftRequest>) -> impl Responder {
    let request = payload.into_inner();
    let template = match state.catalog.get(&request.template_id) {
        Ok(template) => template,
        Err(e) => return HttpResponse::NotFound().body(e.to_string()),
    };

    let subject_template = template.subject(request.language);
    let body_template = template.body(request.language);
    let subject_spans = annotate(subject_template, &request.subject, &request.variables);
    let body_spans = annotate(body_template, &request.body, &request.variables);
    if diverges(subject_template, &request.subject) || diverges(body_template, &request.body) {
        log::debug!("Draft for {} diverges from its template", template.id);
    }

    HttpResponse::Ok().json(DraftResponse {
        subject: request.subject,
        body: request.body,
        subject_spans,
        body_spans,
        variables: request.variables,
    })
}
