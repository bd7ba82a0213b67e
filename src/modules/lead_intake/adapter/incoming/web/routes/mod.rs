pub mod submit_lead;
pub mod validate_step;

pub use submit_lead::submit_lead_handler;
pub use validate_step::{validate_step_handler, StepValidationResponse};
