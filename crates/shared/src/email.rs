//! Email service for sending notification emails.
//!
//! Uses `lettre` for SMTP transport. Callers decide *whether* to send
//! (see `inventopia-core::notification`); this service only delivers.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType, transport::smtp::authentication::Credentials,
};
use thiserror::Error;

use crate::config::EmailConfig;

/// Email service errors.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Failed to build email message.
    #[error("Failed to build email: {0}")]
    BuildError(String),
    /// Failed to send email.
    #[error("Failed to send email: {0}")]
    SendError(String),
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// Email service for sending notification emails.
#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    /// Creates a new email service.
    #[must_use]
    pub const fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Creates an SMTP transport.
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)
            .map_err(|e| EmailError::SendError(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(creds)
            .build();

        Ok(transport)
    }

    /// Sends a plain-text email to a recipient with an optional CC list.
    ///
    /// # Errors
    ///
    /// Returns an error if any address is invalid or delivery fails.
    pub async fn send_email(
        &self,
        to_email: &str,
        cc_emails: &[String],
        subject: &str,
        body: &str,
    ) -> Result<(), EmailError> {
        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let mut builder = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN);

        for cc in cc_emails {
            builder = builder.cc(cc
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?);
        }

        let email = builder
            .body(body.to_string())
            .map_err(|e| EmailError::BuildError(e.to_string()))?;

        let transport = self.create_transport()?;
        transport
            .send(email)
            .await
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        Ok(())
    }

    /// Sends the "item request created" notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the email cannot be sent.
    pub async fn send_request_created(
        &self,
        to_email: &str,
        cc_emails: &[String],
        request_number: &str,
        requester_name: &str,
        lines: &[(String, i32)],
    ) -> Result<(), EmailError> {
        let subject = "Item Request Created";

        let mut items = String::new();
        for (name, qty) in lines {
            items.push_str(&format!("  - {name}: {qty}\n"));
        }

        let body = format!(
            r"A new item request is waiting for approval.

Request number: {request_number}
Requested by:   {requester_name}

Items:
{items}
Please review it in the Inventopia dashboard.
"
        );

        self.send_email(to_email, cc_emails, subject, &body).await
    }

    /// Sends a test email to verify the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the email cannot be sent.
    pub async fn send_test_email(&self, to_email: &str) -> Result<(), EmailError> {
        self.send_email(
            to_email,
            &[],
            "Test Email - Inventopia System",
            "This is a test email from the Inventopia system. \
             The email settings are working correctly.",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_construction() {
        let service = EmailService::new(EmailConfig::default());
        assert!(service.create_transport().is_ok());
    }
}
