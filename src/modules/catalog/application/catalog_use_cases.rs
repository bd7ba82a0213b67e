use std::sync::Arc;

use crate::modules::catalog::application::ports::incoming::use_cases::BrowseProductsUseCase;

#[derive(Clone)]
pub struct CatalogUseCases {
    pub browse: Arc<dyn BrowseProductsUseCase + Send + Sync>,
}
