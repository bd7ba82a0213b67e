use std::sync::Arc;

use crate::modules::lead_intake::application::ports::incoming::use_cases::SubmitLeadUseCase;

#[derive(Clone)]
pub struct LeadIntakeUseCases {
    pub submit: Arc<dyn SubmitLeadUseCase + Send + Sync>,
}
