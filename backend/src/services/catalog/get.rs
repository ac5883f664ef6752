use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /api/catalog`.
pub async fn process(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.as_ref())
}
