use std::sync::Arc;

use actix_web::web;

use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::modules::catalog::application::ports::incoming::use_cases::BrowseProductsUseCase;
use crate::modules::catalog::application::services::BrowseProductsService;
use crate::modules::content::adapter::outgoing::static_data::site_settings;
use crate::modules::content::adapter::outgoing::StaticContentProvider;
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::ports::incoming::use_cases::{
    ListDocumentsUseCase, ResolveDocumentUseCase, ValidateDocumentUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentProvider;
use crate::modules::content::application::services::{
    ListDocumentsService, ResolveDocumentService, ValidateDocumentService,
};
use crate::modules::lead_intake::adapter::outgoing::TracingLeadNotifier;
use crate::modules::lead_intake::application::lead_intake_use_cases::LeadIntakeUseCases;
use crate::modules::lead_intake::application::ports::incoming::use_cases::SubmitLeadUseCase;
use crate::modules::lead_intake::application::services::SubmitLeadService;
use crate::shared::html::SiteChrome;
use crate::AppState;

/// Defaults to the real services over the bundled content, so page tests see the
/// same documents the site ships with. Each `with_*` swaps in a stub.
pub struct TestAppStateBuilder {
    resolve_document: Arc<dyn ResolveDocumentUseCase + Send + Sync>,
    list_documents: Arc<dyn ListDocumentsUseCase + Send + Sync>,
    validate_document: Arc<dyn ValidateDocumentUseCase + Send + Sync>,
    browse_products: Arc<dyn BrowseProductsUseCase + Send + Sync>,
    submit_lead: Arc<dyn SubmitLeadUseCase + Send + Sync>,
    chrome: SiteChrome,
    content_provider: Arc<dyn ContentProvider>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let provider = StaticContentProvider::bundled();

        Self {
            resolve_document: Arc::new(ResolveDocumentService::new(provider.clone())),
            list_documents: Arc::new(ListDocumentsService::new(provider.clone())),
            validate_document: Arc::new(ValidateDocumentService),
            browse_products: Arc::new(BrowseProductsService::new(provider.clone())),
            submit_lead: Arc::new(SubmitLeadService::new(TracingLeadNotifier)),
            chrome: SiteChrome::from_settings(&site_settings()),
            content_provider: Arc::new(provider),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_resolve_document(
        mut self,
        uc: impl ResolveDocumentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resolve_document = Arc::new(uc);
        self
    }

    pub fn with_list_documents(
        mut self,
        uc: impl ListDocumentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_documents = Arc::new(uc);
        self
    }

    pub fn with_browse_products(
        mut self,
        uc: impl BrowseProductsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.browse_products = Arc::new(uc);
        self
    }

    pub fn with_submit_lead(mut self, uc: impl SubmitLeadUseCase + Send + Sync + 'static) -> Self {
        self.submit_lead = Arc::new(uc);
        self
    }

    pub fn with_chrome(mut self, chrome: SiteChrome) -> Self {
        self.chrome = chrome;
        self
    }

    pub fn with_content_provider(mut self, provider: impl ContentProvider + 'static) -> Self {
        self.content_provider = Arc::new(provider);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: ContentUseCases {
                resolve: self.resolve_document,
                list: self.list_documents,
                validate: self.validate_document,
            },
            catalog: CatalogUseCases {
                browse: self.browse_products,
            },
            lead_intake: LeadIntakeUseCases {
                submit: self.submit_lead,
            },
            chrome: self.chrome,
            content_provider: self.content_provider,
        })
    }
}
