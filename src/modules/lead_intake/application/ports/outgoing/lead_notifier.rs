use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::lead_intake::domain::IntakeData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadNotification {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
    pub lead: IntakeData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadNotifierError {
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Side effect of a successful submission. Leads are not stored anywhere else.
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    async fn notify(&self, notification: &LeadNotification) -> Result<(), LeadNotifierError>;
}
