use async_trait::async_trait;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    BrowseProductsError, BrowseProductsUseCase, ProductListing,
};
use crate::modules::catalog::domain::ProductFilter;
use crate::modules::content::application::ports::incoming::use_cases::{
    ListDocumentsError, ListDocumentsUseCase, ResolveDocumentError, ResolveDocumentUseCase,
};
use crate::modules::content::application::ports::outgoing::{ContentProvider, ContentQueryError};
use crate::modules::content::domain::documents::{Document, DocumentType};
use crate::modules::lead_intake::application::ports::incoming::use_cases::{
    LeadReceipt, SubmitLeadError, SubmitLeadUseCase,
};
use crate::modules::lead_intake::domain::IntakeData;

/* --------------------------------------------------
 * Content
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubResolveDocumentUseCase {
    result: Result<Document, ResolveDocumentError>,
}

impl StubResolveDocumentUseCase {
    pub fn found(doc: Document) -> Self {
        Self { result: Ok(doc) }
    }

    pub fn error(err: ResolveDocumentError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ResolveDocumentUseCase for StubResolveDocumentUseCase {
    async fn execute(
        &self,
        _doc_type: DocumentType,
        _slug: &str,
    ) -> Result<Document, ResolveDocumentError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListDocumentsUseCase {
    result: Result<Vec<Document>, ListDocumentsError>,
}

impl StubListDocumentsUseCase {
    pub fn failing() -> Self {
        Self {
            result: Err(ListDocumentsError::QueryFailed(
                "content store unreachable".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ListDocumentsUseCase for StubListDocumentsUseCase {
    async fn execute(&self, _doc_type: DocumentType) -> Result<Vec<Document>, ListDocumentsError> {
        self.result.clone()
    }
}

/// Provider whose `ping` outcome is fixed; lookups find nothing.
#[derive(Clone)]
pub struct StubContentProvider {
    ping: Result<(), ContentQueryError>,
}

impl StubContentProvider {
    pub fn unavailable() -> Self {
        Self {
            ping: Err(ContentQueryError::Upstream("connection refused".to_string())),
        }
    }
}

#[async_trait]
impl ContentProvider for StubContentProvider {
    async fn get_by_slug(
        &self,
        _doc_type: DocumentType,
        _slug: &str,
    ) -> Result<Document, ContentQueryError> {
        Err(ContentQueryError::NotFound)
    }

    async fn list(&self, _doc_type: DocumentType) -> Result<Vec<Document>, ContentQueryError> {
        Ok(vec![])
    }

    async fn ping(&self) -> Result<(), ContentQueryError> {
        self.ping.clone()
    }
}

/* --------------------------------------------------
 * Catalog
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubBrowseProductsUseCase {
    result: Result<ProductListing, BrowseProductsError>,
}

impl StubBrowseProductsUseCase {
    pub fn failing() -> Self {
        Self {
            result: Err(BrowseProductsError::QueryFailed(
                "content store unreachable".to_string(),
            )),
        }
    }
}

#[async_trait]
impl BrowseProductsUseCase for StubBrowseProductsUseCase {
    async fn execute(&self, _filter: &ProductFilter) -> Result<ProductListing, BrowseProductsError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Lead intake
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubSubmitLeadUseCase {
    result: Result<LeadReceipt, SubmitLeadError>,
}

impl StubSubmitLeadUseCase {
    pub fn accepted(receipt: LeadReceipt) -> Self {
        Self {
            result: Ok(receipt),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(SubmitLeadError::NotificationFailed(
                "smtp relay unavailable".to_string(),
            )),
        }
    }
}

#[async_trait]
impl SubmitLeadUseCase for StubSubmitLeadUseCase {
    async fn execute(&self, _data: IntakeData) -> Result<LeadReceipt, SubmitLeadError> {
        self.result.clone()
    }
}
