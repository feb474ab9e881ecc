use anyhow::anyhow;
use archive_email_contracts::{Email, EmailService};
use archive_models::email_address::EmailAddress;
use archive_utils::Apply;
use lettre::{
    message::{header, MessageBuilder},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddress,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub async fn new(url: &str, from: EmailAddress) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = build_message(&self.from, email)?;

        let response = self.transport.send(message).await?;
        debug!(code = %response.code(), "smtp server responded");

        Ok(response.is_positive())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn build_message(from: &EmailAddress, email: Email) -> anyhow::Result<Message> {
    Message::builder()
        .from(from.clone().0.into())
        .to(email.recipient.0.into())
        .apply_map(
            email.reply_to.map(|x| x.0.into()),
            MessageBuilder::reply_to,
        )
        .subject(email.subject)
        .header(header::ContentType::TEXT_PLAIN)
        .body(email.body)
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email {
            recipient: "support@example.org".parse().unwrap(),
            subject: "Contact Form Information".into(),
            body: "Please help".into(),
            reply_to: Some("a@b.com".parse().unwrap()),
        }
    }

    #[test]
    fn message_headers() {
        // Arrange
        let from = "noreply@example.org".parse().unwrap();

        // Act
        let message = build_message(&from, email()).unwrap();

        // Assert
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("From: noreply@example.org\r\n"));
        assert!(formatted.contains("To: support@example.org\r\n"));
        assert!(formatted.contains("Reply-To: a@b.com\r\n"));
        assert!(formatted.contains("Subject: Contact Form Information\r\n"));
        assert!(formatted.contains("Content-Type: text/plain; charset=utf-8\r\n"));
        assert!(formatted.contains("\r\n\r\nPlease help"));
    }

    #[test]
    fn message_without_reply_to() {
        // Arrange
        let from = "noreply@example.org".parse().unwrap();
        let email = Email {
            reply_to: None,
            ..email()
        };

        // Act
        let message = build_message(&from, email).unwrap();

        // Assert
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(!formatted.contains("Reply-To:"));
    }

    #[tokio::test]
    async fn new_invalid_url() {
        let result = EmailServiceImpl::new("not a url", "noreply@example.org".parse().unwrap()).await;
        assert!(result.is_err());
    }
}
