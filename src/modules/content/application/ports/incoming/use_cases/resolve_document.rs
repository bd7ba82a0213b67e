use async_trait::async_trait;

use crate::modules::content::domain::documents::{Document, DocumentType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveDocumentError {
    #[error("Document not found")]
    NotFound,

    #[error("Upstream error: {0}")]
    Upstream(String),
}

#[async_trait]
pub trait ResolveDocumentUseCase: Send + Sync {
    async fn execute(
        &self,
        doc_type: DocumentType,
        slug: &str,
    ) -> Result<Document, ResolveDocumentError>;
}
