// src/modules/content/adapter/outgoing/composite.rs

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;

use crate::modules::content::application::ports::outgoing::{ContentProvider, ContentQueryError};
use crate::modules::content::domain::documents::{Document, DocumentType};

/// Routes each document type to a provider, falling back to a default one.
#[derive(Clone)]
pub struct CompositeContentProvider {
    default: Arc<dyn ContentProvider>,
    routes: HashMap<DocumentType, Arc<dyn ContentProvider>>,
}

impl CompositeContentProvider {
    pub fn new(default: Arc<dyn ContentProvider>) -> Self {
        Self {
            default,
            routes: HashMap::new(),
        }
    }

    pub fn route(mut self, doc_type: DocumentType, provider: Arc<dyn ContentProvider>) -> Self {
        self.routes.insert(doc_type, provider);
        self
    }

    pub fn route_all(
        mut self,
        doc_types: &[DocumentType],
        provider: Arc<dyn ContentProvider>,
    ) -> Self {
        for doc_type in doc_types {
            self.routes.insert(*doc_type, Arc::clone(&provider));
        }
        self
    }

    fn provider_for(&self, doc_type: DocumentType) -> &Arc<dyn ContentProvider> {
        self.routes.get(&doc_type).unwrap_or(&self.default)
    }

    fn distinct_providers(&self) -> Vec<&Arc<dyn ContentProvider>> {
        let mut seen: Vec<&Arc<dyn ContentProvider>> = vec![&self.default];
        for provider in self.routes.values() {
            let addr = Arc::as_ptr(provider) as *const ();
            if !seen.iter().any(|p| Arc::as_ptr(p) as *const () == addr) {
                seen.push(provider);
            }
        }
        seen
    }
}

#[async_trait]
impl ContentProvider for CompositeContentProvider {
    async fn get_by_slug(
        &self,
        doc_type: DocumentType,
        slug: &str,
    ) -> Result<Document, ContentQueryError> {
        self.provider_for(doc_type).get_by_slug(doc_type, slug).await
    }

    async fn list(&self, doc_type: DocumentType) -> Result<Vec<Document>, ContentQueryError> {
        self.provider_for(doc_type).list(doc_type).await
    }

    async fn ping(&self) -> Result<(), ContentQueryError> {
        let results = join_all(self.distinct_providers().into_iter().map(|p| p.ping())).await;
        results.into_iter().collect()
    }
}
