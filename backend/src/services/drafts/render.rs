use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::editor::{Draft, Field};
use common::requests::{DraftResponse, RenderDraftRequest};

/// Actix web handler for `POST /api/drafts/render`.
///
/// Values for names the template does not declare are ignored.
///
/// # Returns
/// - `200 OK` with a `DraftResponse`.
/// - `404 Not Found` when the template id is unknown.
pub async fn process(state: web::Data<AppState>, payload: web::Json<RenderDraftRequest>) -> impl Responder {
    let request = payload.into_inner();
    match render_draft(&state, &request) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => HttpResponse::NotFound().body(e),
    }
}

pub fn render_draft(state: &AppState, request: &RenderDraftRequest) -> Result<DraftResponse, String> {
    let mut draft = Draft::open(&state.catalog, &request.template_id, request.language)
        .map_err(|e| e.to_string())?;
    if let Some(variables) = &request.variables {
        draft = draft.with_saved_variables(variables);
    }

    Ok(DraftResponse {
        subject: draft.text(Field::Subject).to_string(),
        body: draft.text(Field::Body).to_string(),
        subject_spans: draft.annotate(Field::Subject),
        body_spans: draft.annotate(Field::Body),
        variables: draft.variables().clone(),
    })
}

#[cfg(test)]
mod tests {
    use crate::services::drafts::configure_routes;
    use crate::state::testing;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::engine::{flatten, SpanKind};
    use common::model::template::Language;
    use common::model::variable::VariableStore;
    use common::requests::{DraftResponse, RenderDraftRequest};
    use pretty_assertions::assert_eq;

    #[actix_web::test]
    async fn renders_examples_overlaid_with_request_values() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(&dir)))
                .service(configure_routes()),
        )
        .await;

        let variables: VariableStore = [("QuoteNumber", "Q-7"), ("Unrelated", "x")]
            .into_iter()
            .collect();
        let req = test::TestRequest::post()
            .uri("/api/drafts/render")
            .set_json(RenderDraftRequest {
                template_id: "quote_follow_up".into(),
                language: Language::En,
                variables: Some(variables),
            })
            .to_request();
        let draft: DraftResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(draft.subject, "Quote Q-7");
        assert_eq!(draft.body, "Hello Mme Roy,\n\nYour quote Q-7 is ready.");
        assert_eq!(flatten(&draft.body_spans), draft.body);
        assert!(!draft.variables.contains("Unrelated"));
        assert_eq!(
            draft.subject_spans[1].kind,
            SpanKind::Variable {
                name: "QuoteNumber".into(),
                filled: true,
                known: true,
            }
        );
    }

    #[actix_web::test]
    async fn empty_example_leaves_placeholder_unfilled() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(&dir)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/drafts/render")
            .set_json(RenderDraftRequest {
                template_id: "server_outage".into(),
                language: Language::Fr,
                variables: None,
            })
            .to_request();
        let draft: DraftResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(draft.body, "Le service <<Service>> est interrompu.");
        assert!(!draft.body_spans[1].is_filled());
    }

    #[actix_web::test]
    async fn unknown_template_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(&dir)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/drafts/render")
            .set_json(RenderDraftRequest {
                template_id: "missing".into(),
                language: Language::Fr,
                variables: None,
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
