use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::content::adapter::incoming::web::routes::parse_doc_type;
use crate::modules::content::application::ports::incoming::use_cases::ListDocumentsError;
use crate::modules::content::domain::documents::Document;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub items: Vec<Document>,
    pub total: usize,
}

#[utoipa::path(
    get,
    path = "/api/content/{doc_type}",
    tag = "content",
    params(
        ("doc_type" = String, Path, description = "Document type, e.g. `podcast`")
    ),
    responses(
        (
            status = 200,
            description = "Documents of the requested type",
            example = json!({
                "success": true,
                "data": { "items": [], "total": 0 }
            })
        ),
        (status = 400, description = "Unknown document type", body = ErrorResponse),
        (status = 500, description = "Content store failure", body = ErrorResponse)
    )
)]
#[get("/api/content/{doc_type}")]
pub async fn list_documents_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let doc_type = match parse_doc_type(&path.into_inner()) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    match data.content.list.execute(doc_type).await {
        Ok(items) => ApiResponse::success(DocumentListResponse {
            total: items.len(),
            items,
        }),
        Err(ListDocumentsError::QueryFailed(msg)) => {
            error!("Content store error listing {}: {}", doc_type, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::content::application::ports::incoming::use_cases::ListDocumentsUseCase;
    use crate::modules::content::domain::documents::DocumentType;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_lab_project;

    #[derive(Clone)]
    struct MockListDocumentsUseCase {
        result: Result<Vec<Document>, ListDocumentsError>,
    }

    #[async_trait]
    impl ListDocumentsUseCase for MockListDocumentsUseCase {
        async fn execute(
            &self,
            _doc_type: DocumentType,
        ) -> Result<Vec<Document>, ListDocumentsError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_list_documents_success() {
        let app_state = TestAppStateBuilder::default()
            .with_list_documents(MockListDocumentsUseCase {
                result: Ok(vec![
                    Document::LabProject(sample_lab_project("onbrd")),
                    Document::LabProject(sample_lab_project("undr")),
                ]),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_documents_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/content/labProject")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["items"][1]["slug"]["current"], "undr");
    }

    #[actix_web::test]
    async fn test_list_documents_query_failure() {
        let app_state = TestAppStateBuilder::default()
            .with_list_documents(MockListDocumentsUseCase {
                result: Err(ListDocumentsError::QueryFailed("timeout".to_string())),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_documents_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/content/event").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_list_documents_unknown_type() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_documents_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/content/LabProject")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
