use chrono::Utc;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

/// Sends the contact notification email to the configured recipient.
/// One delivery attempt per submission; no retries.
pub struct Notifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
    recipient: String,
}

impl Notifier {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.sender.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)
            .map_err(|e| format!("SMTP error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            sender: config.sender.clone(),
            recipient: config.recipient.clone(),
        })
    }

    /// Attempt delivery. Returns whether the transport accepted the message;
    /// the error itself is logged, not returned, so a failed notification can
    /// never fail the surrounding request.
    pub async fn send(&self, name: &str, email: &str, subject: &str, message: &str) -> bool {
        match self.try_send(name, email, subject, message).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Error sending email: {e}");
                false
            }
        }
    }

    async fn try_send(
        &self,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), String> {
        let body = format!(
            "New contact form submission from your portfolio website:\n\
             \n\
             Name: {name}\n\
             Email: {email}\n\
             Subject: {subject}\n\
             \n\
             Message:\n\
             {message}\n\
             \n\
             ---\n\
             Sent: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S")
        );

        let message = Message::builder()
            .from(
                self.sender
                    .parse()
                    .map_err(|e| format!("Invalid sender address: {e}"))?,
            )
            .to(self
                .recipient
                .parse()
                .map_err(|e| format!("Invalid recipient address: {e}"))?)
            .subject(format!("Portfolio Contact: {subject}"))
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}
