pub mod lead_intake_use_cases;
pub mod ports;
pub mod services;
