pub mod documents;
pub mod schema;
