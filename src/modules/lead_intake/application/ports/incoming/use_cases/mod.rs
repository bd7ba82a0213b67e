mod submit_lead;

pub use submit_lead::{LeadReceipt, SubmitLeadError, SubmitLeadUseCase};
