use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::lead_intake::domain::{IntakeData, Step};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LeadReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitLeadError {
    #[error("{0} is incomplete")]
    InvalidStep(Step),

    #[error("Lead notification failed: {0}")]
    NotificationFailed(String),
}

#[async_trait]
pub trait SubmitLeadUseCase: Send + Sync {
    async fn execute(&self, data: IntakeData) -> Result<LeadReceipt, SubmitLeadError>;
}
