use super::store;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /api/preferences`.
///
/// Returns `200 OK` with the stored preferences, or `503 Service Unavailable`
/// when the database cannot be read.
pub async fn process(state: web::Data<AppState>) -> impl Responder {
    let path = state.database_path.clone();
    match web::block(move || store::load(&path)).await {
        Ok(Ok(preferences)) => HttpResponse::Ok().json(preferences),
        Ok(Err(e)) => HttpResponse::ServiceUnavailable()
            .body(format!("Error loading preferences: {}", e)),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error loading preferences: {}", e)),
    }
}
