//! Mailer port for outbound email notifications.
//!
//! This module defines the trait for delivering plain-text mail, along with
//! the no-op and logging implementations used when no relay is configured.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Error;

/// A plain-text mail message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    /// Recipient address.
    pub to: String,
    /// Sender address.
    pub from: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    #[serde(rename = "text")]
    pub body: String,
}

/// Trait for mail delivery backends.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Callers run `send` on a background task; it may perform slow I/O
/// - Retries, if any, belong in the implementation
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a message.
    async fn send(&self, message: &MailMessage) -> Result<(), Error>;
}

/// A no-op mailer for testing or when delivery is disabled.
pub struct NullMailer;

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, _message: &MailMessage) -> Result<(), Error> {
        Ok(())
    }
}

/// A mailer that writes messages to the log via tracing.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), Error> {
        tracing::info!(
            to = %message.to,
            from = %message.from,
            subject = %message.subject,
            body = %message.body,
            "Mail message"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> MailMessage {
        MailMessage {
            to: "ops@example.com".into(),
            from: "bot@example.com".into(),
            subject: "New Entry Trade".into(),
            body: "***** ENTRY *****\n".into(),
        }
    }

    #[tokio::test]
    async fn null_and_log_mailers_succeed() {
        assert!(NullMailer.send(&message()).await.is_ok());
        assert!(LogMailer.send(&message()).await.is_ok());
    }

    #[test]
    fn message_serializes_body_as_text() {
        let json = serde_json::to_value(message()).unwrap();
        assert_eq!(json["text"], "***** ENTRY *****\n");
        assert_eq!(json["to"], "ops@example.com");
        assert!(json.get("body").is_none());
    }
}
