use async_trait::async_trait;
use serde::Serialize;

use crate::modules::catalog::domain::ProductFilter;
use crate::modules::content::domain::documents::Product;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListing {
    pub products: Vec<Product>,
    /// Categories across the whole catalog, so the filter bar stays stable.
    pub categories: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowseProductsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait BrowseProductsUseCase: Send + Sync {
    async fn execute(&self, filter: &ProductFilter) -> Result<ProductListing, BrowseProductsError>;
}
