// src/api/schemas.rs
//
// OpenAPI-only mirrors of the JSON envelope written by `shared::api::ApiResponse`.
use serde::Serialize;
use utoipa::ToSchema;

/// `success: true` envelope around the payload
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `success: false` envelope; `data` is omitted
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// One of `DOCUMENT_NOT_FOUND`, `UNKNOWN_DOCUMENT_TYPE`, `UNKNOWN_STEP`,
    /// `INVALID_STEP`, `VALIDATION_ERROR`, `INVALID_QUERY`, `INVALID_PATH`, `INTERNAL_ERROR`
    #[schema(example = "DOCUMENT_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Document not found")]
    pub message: String,
}

/// One failed rule, addressed by dotted field path
#[derive(Serialize, ToSchema)]
pub struct ValidationIssueSchema {
    #[schema(example = "tags")]
    pub path: String,
    #[schema(example = "Must be at least 1")]
    pub message: String,
}

/// Result of checking a candidate document against its type's schema
#[derive(Serialize, ToSchema)]
pub struct ValidationReportSchema {
    #[schema(example = "labProject")]
    pub doc_type: String,
    pub valid: bool,
    pub issues: Vec<ValidationIssueSchema>,
    /// Fields an editor would show for this document's current values
    #[schema(example = json!(["title", "slug", "tags"]))]
    pub visible_fields: Vec<String>,
}
