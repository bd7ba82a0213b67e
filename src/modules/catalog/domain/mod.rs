pub mod product_filter;

pub use product_filter::{categories, filter_products, ProductFilter, ALL};
