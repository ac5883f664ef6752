use super::store;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::model::preferences::Preferences;
use log::info;

/// Actix web handler for `POST /api/preferences/save`.
///
/// Favorites pointing at templates the catalog no longer has are dropped
/// before saving.
pub async fn process(state: web::Data<AppState>, payload: web::Json<Preferences>) -> impl Responder {
    let mut preferences = payload.into_inner();
    preferences
        .favorites
        .retain(|id| state.catalog.find(id).is_some());

    let path = state.database_path.clone();
    match web::block(move || store::save(&path, &preferences)).await {
        Ok(Ok(())) => {
            info!("Preferences saved");
            HttpResponse::Ok().body("Preferences saved")
        }
        Ok(Err(e)) => HttpResponse::ServiceUnavailable()
            .body(format!("Error saving preferences: {}", e)),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error saving preferences: {}", e)),
    }
}
