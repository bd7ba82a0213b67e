pub mod submit_lead_service;

pub use submit_lead_service::SubmitLeadService;
