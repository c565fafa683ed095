//! Outbound Mail Infrastructure
//!
//! SMTP mail delivery behind the [`Mailer`] capability trait. Flows that
//! notify users depend on the trait, not on the transport, so tests can
//! swap in a recording fake.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

/// SMTP configuration, loaded once at process start
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user_name: Option<String>,
    pub password: Option<String>,
    /// Display name for the sender
    pub from_name: String,
    /// Sender address
    pub from_email: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 25,
            user_name: None,
            password: None,
            from_name: "Blog".to_string(),
            from_email: "noreply@localhost".to_string(),
        }
    }
}

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// Recipient or sender address failed to parse
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP transport failure
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Outbound mail capability
#[trait_variant::make(Mailer: Send)]
pub trait LocalMailer {
    /// Send a plain-text message to a single recipient.
    async fn send(
        &self,
        to_name: &str,
        to_email: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), MailerError>;
}

/// SMTP-backed mailer
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer from SMTP configuration.
    pub fn new(config: &SmtpConfig) -> Result<Self, MailerError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .port(config.port);

        if let (Some(user), Some(pass)) = (&config.user_name, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from: Mailbox::new(Some(config.from_name.clone()), config.from_email.parse()?),
        })
    }
}

impl Mailer for SmtpMailer {
    async fn send(
        &self,
        to_name: &str,
        to_email: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), MailerError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(Mailbox::new(Some(to_name.to_string()), to_email.parse()?))
            .subject(subject)
            .body(body.to_string())?;

        self.transport.send(message).await?;

        tracing::debug!(to = %to_email, subject = %subject, "Mail sent");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailer_builds_from_default_config() {
        let config = SmtpConfig::default();
        assert!(SmtpMailer::new(&config).is_ok());
    }

    #[test]
    fn invalid_sender_address_rejected() {
        let config = SmtpConfig {
            from_email: "not an address".to_string(),
            ..SmtpConfig::default()
        };
        assert!(matches!(
            SmtpMailer::new(&config),
            Err(MailerError::Address(_))
        ));
    }

    #[tokio::test]
    async fn invalid_recipient_address_rejected() {
        let mailer = SmtpMailer::new(&SmtpConfig::default()).unwrap();
        let result = Mailer::send(&mailer, "Alice", "not an address", "hi", "hello").await;
        assert!(matches!(result, Err(MailerError::Address(_))));
    }
}
