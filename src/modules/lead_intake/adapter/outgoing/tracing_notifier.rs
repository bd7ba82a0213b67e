use async_trait::async_trait;
use tracing::info;

use crate::modules::lead_intake::application::ports::outgoing::{
    LeadNotification, LeadNotifier, LeadNotifierError,
};

/// Records each lead as a structured log event. Used when no studio inbox is configured.
#[derive(Debug, Clone, Default)]
pub struct TracingLeadNotifier;

#[async_trait]
impl LeadNotifier for TracingLeadNotifier {
    async fn notify(&self, notification: &LeadNotification) -> Result<(), LeadNotifierError> {
        let lead = &notification.lead;

        info!(
            reference = %notification.reference,
            received_at = %notification.received_at,
            name = %lead.name,
            email = %lead.email,
            company = lead.company.as_deref().unwrap_or(""),
            project_type = lead.project_type.as_deref().unwrap_or(""),
            budget = lead.budget.as_deref().unwrap_or(""),
            timeline = lead.timeline.as_deref().unwrap_or(""),
            goals = %lead.goals.join(","),
            description = %lead.description,
            "New project lead"
        );

        Ok(())
    }
}
