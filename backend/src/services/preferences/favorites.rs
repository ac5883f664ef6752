use super::store;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `POST /api/preferences/favorites/{template_id}`.
///
/// # Returns
/// - `200 OK` with the updated preferences.
/// - `404 Not Found` when the template is not in the catalog.
/// - `503 Service Unavailable` when the database cannot be updated.
pub async fn process(state: web::Data<AppState>, template_id: web::Path<String>) -> impl Responder {
    let template_id = template_id.into_inner();
    if let Err(e) = state.catalog.get(&template_id) {
        return HttpResponse::NotFound().body(e.to_string());
    }

    let path = state.database_path.clone();
    match web::block(move || store::toggle_favorite(&path, &template_id)).await {
        Ok(Ok(preferences)) => HttpResponse::Ok().json(preferences),
        Ok(Err(e)) => HttpResponse::ServiceUnavailable()
            .body(format!("Error updating favorites: {}", e)),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error updating favorites: {}", e)),
    }
}
