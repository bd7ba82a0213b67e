pub mod get_document;
pub mod list_documents;
pub mod validate_document;

pub use get_document::get_document_handler;
pub use list_documents::list_documents_handler;
pub use validate_document::validate_document_handler;

use crate::modules::content::domain::documents::DocumentType;
use crate::shared::api::ApiResponse;
use actix_web::HttpResponse;

/// Parses the `{doc_type}` path segment, answering 400 for unknown names.
pub(crate) fn parse_doc_type(raw: &str) -> Result<DocumentType, HttpResponse> {
    raw.parse::<DocumentType>().map_err(|e| {
        ApiResponse::bad_request("UNKNOWN_DOCUMENT_TYPE", &e.to_string())
    })
}
