pub mod get_products;

pub use get_products::get_products_handler;
