pub mod assets;
pub mod layout;
pub mod motion;

pub use layout::{base_document, html_response, not_found_view, site_header, SiteChrome};
pub use motion::{motion_attr, motion_style, ScrollBinding};
