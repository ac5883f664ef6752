//! # Template Search Service
//!
//! Backs `GET /api/templates`. The query string maps directly onto
//! `TemplateQuery`; when `favorites_only` is set the favorites are read from
//! the preferences store first.

use crate::services::preferences::store;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::model::catalog::TemplateQuery;

pub async fn process(state: web::Data<AppState>, query: web::Query<TemplateQuery>) -> impl Responder {
    let query = query.into_inner();
    let favorites = if query.favorites_only {
        match load_favorites(&state).await {
            Ok(favorites) => favorites,
            Err(e) => {
                return HttpResponse::ServiceUnavailable()
                    .body(format!("Error loading favorites: {}", e))
            }
        }
    } else {
        Vec::new()
    };

    let templates = state.catalog.filter(&query, &favorites);
    log::debug!("Template search {:?} matched {}", query.q, templates.len());
    HttpResponse::Ok().json(templates)
}

async fn load_favorites(state: &AppState) -> Result<Vec<String>, String> {
    let path = state.database_path.clone();
    web::block(move || store::load(&path))
        .await
        .map_err(|e| e.to_string())?
        .map(|preferences| preferences.favorites)
}

#[cfg(test)]
mod tests {
    use crate::services::preferences::store;
    use crate::services::templates::configure_routes;
    use crate::state::testing;
    use actix_web::{test, web, App};
    use common::model::template::Template;

    fn ids(templates: &[Template]) -> Vec<&str> {
        templates.iter().map(|t| t.id.as_str()).collect()
    }

    #[actix_web::test]
    async fn filters_by_search_and_category() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(&dir)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/templates").to_request();
        let all: Vec<Template> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&all), vec!["quote_follow_up", "server_outage"]);

        let req = test::TestRequest::get()
            .uri("/api/templates?q=OUTAGE&lang=en")
            .to_request();
        let found: Vec<Template> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&found), vec!["server_outage"]);

        let req = test::TestRequest::get()
            .uri("/api/templates?category=Devis%20et%20estimations")
            .to_request();
        let found: Vec<Template> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&found), vec!["quote_follow_up"]);
    }

    #[actix_web::test]
    async fn favorites_only_reads_stored_favorites() {
        let dir = tempfile::tempdir().unwrap();
        let state = testing::state(&dir);
        store::toggle_favorite(&state.database_path, "server_outage").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/templates?favorites_only=true")
            .to_request();
        let found: Vec<Template> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&found), vec!["server_outage"]);
    }
}
