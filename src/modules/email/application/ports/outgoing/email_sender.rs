use async_trait::async_trait;

/// A single HTML message. `reply_to` lets the recipient answer someone other than the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub reply_to: Option<String>,
}

impl OutgoingEmail {
    pub fn new(to: &str, subject: &str, html_body: impl Into<String>) -> Self {
        Self {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body: html_body.into(),
            reply_to: None,
        }
    }

    pub fn reply_to(mut self, address: &str) -> Self {
        self.reply_to = Some(address.to_string());
        self
    }
}

/// Errors are transport or address messages.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), String>;
}
