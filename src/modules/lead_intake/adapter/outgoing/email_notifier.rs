use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use maud::{html, Markup, DOCTYPE};

use crate::modules::email::application::ports::outgoing::email_sender::{
    EmailSender, OutgoingEmail,
};
use crate::modules::lead_intake::application::ports::outgoing::{
    LeadNotification, LeadNotifier, LeadNotifierError,
};
use crate::modules::lead_intake::domain::options::label_of;
use crate::modules::lead_intake::domain::{Choice, BUDGET_RANGES, GOALS, PROJECT_TYPES, TIMELINES};

/// Mails a summary of each lead to the studio inbox.
#[derive(Clone)]
pub struct EmailLeadNotifier {
    sender: Arc<dyn EmailSender + Send + Sync>,
    inbox: String,
}

impl fmt::Debug for EmailLeadNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailLeadNotifier")
            .field("sender", &"<dyn EmailSender>")
            .field("inbox", &self.inbox)
            .finish()
    }
}

impl EmailLeadNotifier {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, inbox: &str) -> Self {
        Self {
            sender,
            inbox: inbox.to_string(),
        }
    }
}

fn subject(notification: &LeadNotification) -> String {
    let lead = &notification.lead;
    match lead.company.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(company) => format!("New project enquiry: {} ({})", lead.name.trim(), company.trim()),
        None => format!("New project enquiry: {}", lead.name.trim()),
    }
}

fn display(choices: &[Choice], value: &Option<String>) -> String {
    value
        .as_deref()
        .map(|v| label_of(choices, v).unwrap_or(v).to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn render_body(notification: &LeadNotification) -> Markup {
    let lead = &notification.lead;

    html! {
        (DOCTYPE)
        html {
            body {
                h1 { "New project enquiry" }
                p { "Reference: " code { (notification.reference.to_string()) } }
                p { "Received: " (notification.received_at.format("%Y-%m-%d %H:%M UTC").to_string()) }
                table {
                    tr { th { "Name" } td { (lead.name) } }
                    tr { th { "Email" } td { a href={ "mailto:" (lead.email) } { (lead.email) } } }
                    @if let Some(company) = &lead.company {
                        tr { th { "Company" } td { (company) } }
                    }
                    tr { th { "Project type" } td { (display(PROJECT_TYPES, &lead.project_type)) } }
                    tr { th { "Budget" } td { (display(BUDGET_RANGES, &lead.budget)) } }
                    tr { th { "Timeline" } td { (display(TIMELINES, &lead.timeline)) } }
                }
                h2 { "Goals" }
                ul {
                    @for goal in &lead.goals {
                        li { (label_of(GOALS, goal).unwrap_or(goal.as_str())) }
                    }
                }
                h2 { "Description" }
                p { (lead.description) }
            }
        }
    }
}

#[async_trait]
impl LeadNotifier for EmailLeadNotifier {
    async fn notify(&self, notification: &LeadNotification) -> Result<(), LeadNotifierError> {
        let email = OutgoingEmail::new(
            &self.inbox,
            &subject(notification),
            render_body(notification).into_string(),
        )
        .reply_to(notification.lead.email.trim());

        self.sender
            .send_email(&email)
            .await
            .map_err(LeadNotifierError::DeliveryFailed)
    }
}
