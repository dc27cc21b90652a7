use chrono::Local;
use lettre::{
    transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport, Message,
    Tokio1Executor,
};

use crate::{
    config::MailConfig,
    delivery::{DeliveryOutcome, DigestSink},
    Digest,
};

const BODY_MARKER_OPEN: &str = "--- Email Body ---";
const BODY_MARKER_CLOSE: &str = "------------------";

/// Sends the digest over an authenticated STARTTLS SMTP session, or prints
/// it to stdout when the mail configuration is incomplete.
pub struct EmailSink {
    mail: MailConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

impl EmailSink {
    pub fn new(mail: MailConfig) -> Self {
        Self { mail }
    }
}

impl DigestSink for EmailSink {
    type Error = DeliveryError;

    async fn deliver(&self, digest: &Digest) -> Result<DeliveryOutcome, Self::Error> {
        let body = digest.to_body();

        let Some((sender, password, recipient)) = self.mail.credentials() else {
            tracing::info!("Email credentials not set; writing digest to stdout");
            println!("{BODY_MARKER_OPEN}");
            println!("{body}");
            println!("{BODY_MARKER_CLOSE}");
            return Ok(DeliveryOutcome::Console);
        };

        let message = Message::builder()
            .from(sender.parse()?)
            .to(recipient.parse()?)
            .subject(digest.subject(Local::now().date_naive()))
            .body(body)?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.mail.smtp_server)?
            .port(self.mail.smtp_port)
            .credentials(Credentials::new(sender.to_string(), password.to_string()))
            .build();

        mailer
            .send(message)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to send digest email"))?;

        Ok(DeliveryOutcome::Sent)
    }
}
