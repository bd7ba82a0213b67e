mod list_documents;
mod resolve_document;
mod validate_document;

pub use list_documents::{ListDocumentsError, ListDocumentsUseCase};
pub use resolve_document::{ResolveDocumentError, ResolveDocumentUseCase};
pub use validate_document::{ValidateDocumentUseCase, ValidationReport};
