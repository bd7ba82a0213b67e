// src/modules/content/application/ports/outgoing/content_provider.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::content::domain::documents::{Document, DocumentType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Document not found")]
    NotFound,

    #[error("Content store error: {0}")]
    Upstream(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only; the site never writes to the content store)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// At most one document of `doc_type` whose slug equals `slug` exactly.
    async fn get_by_slug(
        &self,
        doc_type: DocumentType,
        slug: &str,
    ) -> Result<Document, ContentQueryError>;

    async fn list(&self, doc_type: DocumentType) -> Result<Vec<Document>, ContentQueryError>;

    /// Cheap reachability check for readiness probes.
    async fn ping(&self) -> Result<(), ContentQueryError>;
}

#[async_trait]
impl<T> ContentProvider for Arc<T>
where
    T: ContentProvider + ?Sized,
{
    async fn get_by_slug(
        &self,
        doc_type: DocumentType,
        slug: &str,
    ) -> Result<Document, ContentQueryError> {
        (**self).get_by_slug(doc_type, slug).await
    }

    async fn list(&self, doc_type: DocumentType) -> Result<Vec<Document>, ContentQueryError> {
        (**self).list(doc_type).await
    }

    async fn ping(&self) -> Result<(), ContentQueryError> {
        (**self).ping().await
    }
}
