use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::{
    ListDocumentsError, ListDocumentsUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentProvider;
use crate::modules::content::domain::documents::{Document, DocumentType};

pub struct ListDocumentsService<P>
where
    P: ContentProvider,
{
    provider: P,
}

impl<P> ListDocumentsService<P>
where
    P: ContentProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> ListDocumentsUseCase for ListDocumentsService<P>
where
    P: ContentProvider + Send + Sync,
{
    async fn execute(&self, doc_type: DocumentType) -> Result<Vec<Document>, ListDocumentsError> {
        let documents = self
            .provider
            .list(doc_type)
            .await
            .map_err(|e| ListDocumentsError::QueryFailed(e.to_string()))?;

        Ok(documents
            .into_iter()
            .filter(|d| d.document_type() == doc_type)
            .collect())
    }
}
