use actix_web::{post, web, Responder};
use serde_json::Value;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationReportSchema};
use crate::modules::content::adapter::incoming::web::routes::parse_doc_type;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Checks a candidate document against its schema. Always 200 once the type is known;
/// the report carries `valid` and the issue list.
#[utoipa::path(
    post,
    path = "/api/content/{doc_type}/validate",
    tag = "content",
    params(
        ("doc_type" = String, Path, description = "Document type to validate against")
    ),
    request_body(content = Object, description = "Candidate document as JSON"),
    responses(
        (
            status = 200,
            description = "Validation report",
            body = inline(SuccessResponse<ValidationReportSchema>),
            example = json!({
                "success": true,
                "data": {
                    "doc_type": "labProject",
                    "valid": false,
                    "issues": [{ "path": "tags", "message": "Must be at least 1" }],
                    "visible_fields": ["title", "slug", "tags"]
                }
            })
        ),
        (status = 400, description = "Unknown document type or malformed JSON", body = ErrorResponse)
    )
)]
#[post("/api/content/{doc_type}/validate")]
pub async fn validate_document_handler(
    path: web::Path<String>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let doc_type = match parse_doc_type(&path.into_inner()) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    let report = data.content.validate.execute(doc_type, &body);
    ApiResponse::success(report)
}
