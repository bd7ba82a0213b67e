use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::content::adapter::incoming::web::routes::parse_doc_type;
use crate::modules::content::application::ports::incoming::use_cases::ResolveDocumentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DocumentPath {
    pub doc_type: String,
    pub slug: String,
}

#[utoipa::path(
    get,
    path = "/api/content/{doc_type}/{slug}",
    tag = "content",
    params(
        ("doc_type" = String, Path, description = "Document type, e.g. `labProject` or `podcast`"),
        ("slug" = String, Path, description = "Exact slug; no normalization is applied")
    ),
    responses(
        (
            status = 200,
            description = "Document found",
            example = json!({
                "success": true,
                "data": {
                    "_type": "labProject",
                    "_id": "lab-onbrd",
                    "title": "Onbrd",
                    "slug": { "current": "onbrd" },
                    "tags": ["HR", "SaaS"]
                }
            })
        ),
        (status = 400, description = "Unknown document type", body = ErrorResponse),
        (status = 404, description = "No document with this slug", body = ErrorResponse),
        (status = 500, description = "Content store failure", body = ErrorResponse)
    )
)]
#[get("/api/content/{doc_type}/{slug}")]
pub async fn get_document_handler(
    path: web::Path<DocumentPath>,
    data: web::Data<AppState>,
) -> impl Responder {
    let path = path.into_inner();

    let doc_type = match parse_doc_type(&path.doc_type) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    match data.content.resolve.execute(doc_type, &path.slug).await {
        Ok(document) => ApiResponse::success(document),

        Err(ResolveDocumentError::NotFound) => {
            ApiResponse::not_found("DOCUMENT_NOT_FOUND", "Document not found")
        }

        Err(ResolveDocumentError::Upstream(msg)) => {
            error!(
                "Content store error resolving {} slug={}: {}",
                doc_type, path.slug, msg
            );
            ApiResponse::internal_error()
        }
    }
}
