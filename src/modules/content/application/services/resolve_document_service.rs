use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::{
    ResolveDocumentError, ResolveDocumentUseCase,
};
use crate::modules::content::application::ports::outgoing::{ContentProvider, ContentQueryError};
use crate::modules::content::domain::documents::{Document, DocumentType};

pub struct ResolveDocumentService<P>
where
    P: ContentProvider,
{
    provider: P,
}

impl<P> ResolveDocumentService<P>
where
    P: ContentProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> ResolveDocumentUseCase for ResolveDocumentService<P>
where
    P: ContentProvider + Send + Sync,
{
    async fn execute(
        &self,
        doc_type: DocumentType,
        slug: &str,
    ) -> Result<Document, ResolveDocumentError> {
        let document = self
            .provider
            .get_by_slug(doc_type, slug)
            .await
            .map_err(|e| match e {
                ContentQueryError::NotFound => ResolveDocumentError::NotFound,
                ContentQueryError::Upstream(msg) => ResolveDocumentError::Upstream(msg),
                ContentQueryError::Decode(msg) => ResolveDocumentError::Upstream(msg),
            })?;

        // A provider answering with another type is treated as a miss, never rendered.
        if document.document_type() != doc_type {
            return Err(ResolveDocumentError::NotFound);
        }

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::tests::support::fixtures::{sample_lab_project, sample_podcast};

    /* --------------------------------------------------
     * Mock ContentProvider
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockContentProvider {
        result: Result<Document, ContentQueryError>,
    }

    impl MockContentProvider {
        fn success(doc: Document) -> Self {
            Self { result: Ok(doc) }
        }

        fn error(err: ContentQueryError) -> Self {
            Self { result: Err(err) }
        }
    }

    #[async_trait]
    impl ContentProvider for MockContentProvider {
        async fn get_by_slug(
            &self,
            _doc_type: DocumentType,
            _slug: &str,
        ) -> Result<Document, ContentQueryError> {
            self.result.clone()
        }

        async fn list(&self, _doc_type: DocumentType) -> Result<Vec<Document>, ContentQueryError> {
            unimplemented!("not used in ResolveDocumentService tests")
        }

        async fn ping(&self) -> Result<(), ContentQueryError> {
            unimplemented!("not used in ResolveDocumentService tests")
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn execute_returns_document_on_match() {
        let service = ResolveDocumentService::new(MockContentProvider::success(
            Document::LabProject(sample_lab_project("onbrd")),
        ));

        let result = service.execute(DocumentType::LabProject, "onbrd").await;

        let doc = result.unwrap();
        assert_eq!(doc.slug(), Some("onbrd"));
    }

    #[tokio::test]
    async fn execute_maps_not_found() {
        let service =
            ResolveDocumentService::new(MockContentProvider::error(ContentQueryError::NotFound));

        let result = service
            .execute(DocumentType::LabProject, "does-not-exist")
            .await;

        assert!(matches!(result, Err(ResolveDocumentError::NotFound)));
    }

    #[tokio::test]
    async fn execute_maps_upstream_error() {
        let service = ResolveDocumentService::new(MockContentProvider::error(
            ContentQueryError::Upstream("503 from store".to_string()),
        ));

        let result = service.execute(DocumentType::Podcast, "ep-1").await;

        assert!(matches!(
            result,
            Err(ResolveDocumentError::Upstream(msg)) if msg == "503 from store"
        ));
    }

    #[tokio::test]
    async fn execute_maps_decode_error_to_upstream() {
        let service = ResolveDocumentService::new(MockContentProvider::error(
            ContentQueryError::Decode("missing field `title`".to_string()),
        ));

        let result = service.execute(DocumentType::Podcast, "ep-1").await;

        assert!(matches!(result, Err(ResolveDocumentError::Upstream(_))));
    }

    #[tokio::test]
    async fn execute_treats_type_mismatch_as_not_found() {
        let service = ResolveDocumentService::new(MockContentProvider::success(
            Document::Podcast(sample_podcast("onbrd")),
        ));

        let result = service.execute(DocumentType::LabProject, "onbrd").await;

        assert!(matches!(result, Err(ResolveDocumentError::NotFound)));
    }
}
