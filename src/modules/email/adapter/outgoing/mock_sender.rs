use crate::modules::email::application::ports::outgoing::email_sender::{
    EmailSender, OutgoingEmail,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Keeps every message in send order instead of delivering it.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_sent_emails(&self) -> Vec<OutgoingEmail> {
        self.sent_emails
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), String> {
        self.sent_emails
            .lock()
            .map_err(|e| e.to_string())?
            .push(email.clone());
        Ok(())
    }
}
