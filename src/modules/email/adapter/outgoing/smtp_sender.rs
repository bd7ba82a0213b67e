use crate::modules::email::application::ports::outgoing::email_sender::{
    EmailSender, OutgoingEmail,
};
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::message::{header::ContentType, Mailbox};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// TLS relay with credentials. Fails only when the relay host is unusable.
    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, String> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| format!("Invalid SMTP relay {smtp_server}: {e}"))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email)
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, String> {
    address
        .parse()
        .map_err(|e| format!("Invalid address {address:?}: {e}"))
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), String> {
        let mut builder = Message::builder()
            .from(parse_mailbox(&self.from_email)?)
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_HTML);

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(parse_mailbox(reply_to)?);
        }

        let message = builder
            .body(email.html_body.clone())
            .map_err(|e| e.to_string())?;

        self.mailer.send(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturingMailer {
        sent: Arc<Mutex<Vec<Message>>>,
    }

    #[async_trait]
    impl Mailer for CapturingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    struct UnreachableMailer;

    #[async_trait]
    impl Mailer for UnreachableMailer {
        async fn send(&self, _: Message) -> Result<(), String> {
            panic!("Should not reach mailer when an address is invalid");
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _: Message) -> Result<(), String> {
            Err("Connection refused".to_string())
        }
    }

    #[tokio::test]
    async fn test_send_email_builds_html_message() {
        let mailer = CapturingMailer::default();
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(mailer.clone()), "site@savvy.studio");

        let email = OutgoingEmail::new("hello@savvy.studio", "New lead", "<p>Hi</p>")
            .reply_to("ada@example.com");
        let result = sender.send_email(&email).await;

        assert!(result.is_ok(), "Expected Ok, got {:?}", result);

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);

        let raw = String::from_utf8(sent[0].formatted()).unwrap();
        assert!(raw.contains("From: site@savvy.studio"));
        assert!(raw.contains("To: hello@savvy.studio"));
        assert!(raw.contains("Subject: New lead"));
        assert!(raw.contains("Reply-To: ada@example.com"));
        assert!(raw.contains("Content-Type: text/html"));
    }

    #[tokio::test]
    async fn test_send_email_invalid_from_address() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "invalid-from-email");

        let result = sender
            .send_email(&OutgoingEmail::new("hello@savvy.studio", "Subject", "<p>Test</p>"))
            .await;

        assert!(result.is_err(), "Expected error from invalid 'from' address");
    }

    #[tokio::test]
    async fn test_send_email_invalid_to_address() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "site@savvy.studio");

        let result = sender
            .send_email(&OutgoingEmail::new("not-an-email", "Subject", "<p>Test</p>"))
            .await;

        assert!(result.is_err(), "Expected error from invalid 'to' address");
    }

    #[tokio::test]
    async fn test_send_email_propagates_transport_error() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(FailingMailer), "site@savvy.studio");

        let result = sender
            .send_email(&OutgoingEmail::new("hello@savvy.studio", "Subject", "<p>Body</p>"))
            .await;

        assert_eq!(result, Err("Connection refused".to_string()));
    }

    #[tokio::test]
    async fn test_send_email_rejects_invalid_reply_to() {
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer), "site@savvy.studio");

        let email = OutgoingEmail::new("hello@savvy.studio", "Subject", "<p>Test</p>")
            .reply_to("nobody at example");
        let result = sender.send_email(&email).await;

        assert!(result.is_err(), "Expected error from invalid reply-to address");
    }

    #[tokio::test]
    async fn test_new_accepts_relay_hostname() {
        let sender = SmtpEmailSender::new(
            "smtp.savvy.studio",
            "user",
            "pass",
            "site@savvy.studio",
        );

        assert!(sender.is_ok());
    }
}
