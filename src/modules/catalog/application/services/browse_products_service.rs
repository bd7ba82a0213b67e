use async_trait::async_trait;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    BrowseProductsError, BrowseProductsUseCase, ProductListing,
};
use crate::modules::catalog::domain::{categories, filter_products, ProductFilter};
use crate::modules::content::application::ports::outgoing::ContentProvider;
use crate::modules::content::domain::documents::{Document, DocumentType, Product};

pub struct BrowseProductsService<P>
where
    P: ContentProvider,
{
    provider: P,
}

impl<P> BrowseProductsService<P>
where
    P: ContentProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> BrowseProductsUseCase for BrowseProductsService<P>
where
    P: ContentProvider + Send + Sync,
{
    async fn execute(&self, filter: &ProductFilter) -> Result<ProductListing, BrowseProductsError> {
        let all: Vec<Product> = self
            .provider
            .list(DocumentType::Product)
            .await
            .map_err(|e| BrowseProductsError::QueryFailed(e.to_string()))?
            .into_iter()
            .filter_map(Document::into_product)
            .collect();

        let products = filter_products(&all, filter);

        Ok(ProductListing {
            categories: categories(&all),
            total: products.len(),
            products,
        })
    }
}
