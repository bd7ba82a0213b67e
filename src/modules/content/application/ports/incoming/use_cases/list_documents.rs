use async_trait::async_trait;

use crate::modules::content::domain::documents::{Document, DocumentType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListDocumentsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListDocumentsUseCase: Send + Sync {
    async fn execute(&self, doc_type: DocumentType) -> Result<Vec<Document>, ListDocumentsError>;
}
