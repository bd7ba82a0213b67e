pub mod sanity_config;
pub mod sanity_query;

pub use sanity_config::SanityConfig;
pub use sanity_query::SanityContentProvider;
