use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::model::catalog::{category_label, ALL_CATEGORIES};
use common::model::template::Language;
use common::requests::CategoryOption;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    #[serde(default)]
    lang: Language,
}

/// Actix web handler for `GET /api/templates/categories`.
pub async fn process(state: web::Data<AppState>, query: web::Query<CategoriesQuery>) -> impl Responder {
    let options: Vec<CategoryOption> = std::iter::once(ALL_CATEGORIES)
        .chain(state.catalog.categories())
        .map(|id| CategoryOption {
            id: id.to_string(),
            label: category_label(id, query.lang).to_string(),
        })
        .collect();
    HttpResponse::Ok().json(options)
}

#[cfg(test)]
mod tests {
    use crate::services::templates::configure_routes;
    use crate::state::testing;
    use actix_web::{test, web, App};
    use common::requests::CategoryOption;
    use pretty_assertions::assert_eq;

    #[actix_web::test]
    async fn lists_localized_categories_after_all() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(&dir)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/templates/categories?lang=en")
            .to_request();
        let options: Vec<CategoryOption> = test::call_and_read_body_json(&app, req).await;
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["All categories", "Quotes and estimates", "Technical issues"]
        );
        assert_eq!(options[1].id, "Devis et estimations");
    }
}
