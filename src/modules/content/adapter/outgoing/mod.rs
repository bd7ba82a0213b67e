pub mod composite;
pub mod sanity;
pub mod static_content;
pub mod static_data;

pub use composite::CompositeContentProvider;
pub use sanity::{SanityConfig, SanityContentProvider};
pub use static_content::StaticContentProvider;
