use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::lead_intake::application::ports::incoming::use_cases::{
    LeadReceipt, SubmitLeadError, SubmitLeadUseCase,
};
use crate::modules::lead_intake::application::ports::outgoing::{
    LeadNotification, LeadNotifier, LeadNotifierError,
};
use crate::modules::lead_intake::domain::IntakeData;

pub struct SubmitLeadService<N>
where
    N: LeadNotifier,
{
    notifier: N,
}

impl<N> SubmitLeadService<N>
where
    N: LeadNotifier,
{
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl<N> SubmitLeadUseCase for SubmitLeadService<N>
where
    N: LeadNotifier + Send + Sync,
{
    async fn execute(&self, data: IntakeData) -> Result<LeadReceipt, SubmitLeadError> {
        if let Some(step) = data.first_invalid_step() {
            return Err(SubmitLeadError::InvalidStep(step));
        }

        let notification = LeadNotification {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
            lead: data,
        };

        self.notifier
            .notify(&notification)
            .await
            .map_err(|e| match e {
                LeadNotifierError::DeliveryFailed(msg) => {
                    error!(
                        "Lead {} could not be delivered: {}",
                        notification.reference, msg
                    );
                    SubmitLeadError::NotificationFailed(msg)
                }
            })?;

        info!("Lead {} accepted", notification.reference);

        Ok(LeadReceipt {
            reference: notification.reference,
            received_at: notification.received_at,
        })
    }
}
