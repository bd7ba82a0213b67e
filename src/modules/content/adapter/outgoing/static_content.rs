// src/modules/content/adapter/outgoing/static_content.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::content::adapter::outgoing::static_data;
use crate::modules::content::application::ports::outgoing::{ContentProvider, ContentQueryError};
use crate::modules::content::domain::documents::{Document, DocumentType};

/// In-memory documents. Slug lookup is a linear scan on the exact string: no trimming,
/// no case folding, first match wins.
#[derive(Clone, Default)]
pub struct StaticContentProvider {
    documents: Arc<Vec<Document>>,
}

impl StaticContentProvider {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents: Arc::new(documents),
        }
    }

    pub fn bundled() -> Self {
        Self::new(static_data::bundled_documents())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl ContentProvider for StaticContentProvider {
    async fn get_by_slug(
        &self,
        doc_type: DocumentType,
        slug: &str,
    ) -> Result<Document, ContentQueryError> {
        self.documents
            .iter()
            .find(|d| d.document_type() == doc_type && d.slug() == Some(slug))
            .cloned()
            .ok_or(ContentQueryError::NotFound)
    }

    async fn list(&self, doc_type: DocumentType) -> Result<Vec<Document>, ContentQueryError> {
        Ok(self
            .documents
            .iter()
            .filter(|d| d.document_type() == doc_type)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), ContentQueryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bundled_lab_projects_resolve_by_slug() {
        let provider = StaticContentProvider::bundled();

        for (slug, title) in [("onbrd", "Onbrd"), ("undr", "Undr"), ("trekker", "Trekker")] {
            let doc = provider
                .get_by_slug(DocumentType::LabProject, slug)
                .await
                .unwrap_or_else(|e| panic!("{slug} should resolve: {e}"));
            assert_eq!(doc.title(), title);
        }
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let provider = StaticContentProvider::bundled();

        let result = provider
            .get_by_slug(DocumentType::LabProject, "does-not-exist")
            .await;

        assert_eq!(result, Err(ContentQueryError::NotFound));
    }

    #[tokio::test]
    async fn lookup_does_not_normalize_slugs() {
        let provider = StaticContentProvider::bundled();

        for slug in ["ONBRD", " onbrd", "onbrd/"] {
            let result = provider.get_by_slug(DocumentType::LabProject, slug).await;
            assert_eq!(result, Err(ContentQueryError::NotFound), "slug {slug:?}");
        }
    }

    #[tokio::test]
    async fn same_slug_in_another_type_is_not_a_match() {
        let provider = StaticContentProvider::bundled();

        // `onbrd` exists as both lab project and product
        let product = provider
            .get_by_slug(DocumentType::Product, "onbrd")
            .await
            .unwrap();
        assert_eq!(product.document_type(), DocumentType::Product);

        let result = provider.get_by_slug(DocumentType::Venture, "onbrd").await;
        assert_eq!(result, Err(ContentQueryError::NotFound));
    }

    #[tokio::test]
    async fn site_settings_never_match_a_slug() {
        let provider = StaticContentProvider::bundled();

        let result = provider
            .get_by_slug(DocumentType::SiteSettings, "siteSettings")
            .await;
        assert_eq!(result, Err(ContentQueryError::NotFound));

        let listed = provider.list(DocumentType::SiteSettings).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn empty_provider_lists_nothing_and_pings() {
        let provider = StaticContentProvider::default();

        assert!(provider.is_empty());
        assert!(provider.list(DocumentType::Post).await.unwrap().is_empty());
        assert!(provider.ping().await.is_ok());
    }
}
