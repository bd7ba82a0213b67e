mod browse_products;

pub use browse_products::{BrowseProductsError, BrowseProductsUseCase, ProductListing};
