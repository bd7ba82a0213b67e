pub mod catalog_use_cases;
pub mod ports;
pub mod services;
