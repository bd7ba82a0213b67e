pub mod browse_products_service;

pub use browse_products_service::BrowseProductsService;
