pub mod list_documents_service;
pub mod resolve_document_service;
pub mod validate_document_service;

pub use list_documents_service::ListDocumentsService;
pub use resolve_document_service::ResolveDocumentService;
pub use validate_document_service::ValidateDocumentService;
