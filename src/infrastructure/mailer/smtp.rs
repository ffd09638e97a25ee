use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    address::Address,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{errors::MailError, settings::AppConfig};

use super::{ContactEmail, Mailer};

const SENDER_NAME: &str = "Portfolio Contact Form";

/// Where submissions land. Fixed, not configurable per request.
const RECIPIENT: &str = "ecomorph10@gmail.com";

/// A hung relay must not hold the request open indefinitely.
const SEND_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
}

impl SmtpMailer {
    /// Builds the relay transport from the two configured secrets. Returns
    /// `None` when either is missing or unusable; the contact endpoint then
    /// rejects with a configuration error while the rest of the site serves.
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        let (username, password) = match (&config.smtp_username, &config.smtp_password) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
                (user.clone(), pass.clone())
            }
            _ => return None,
        };

        let sender_address: Address = match username.parse() {
            Ok(address) => address,
            Err(e) => {
                tracing::warn!("SMTP username is not a valid sender address: {e}");
                return None;
            }
        };

        let builder = match AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host) {
            Ok(builder) => builder,
            Err(e) => {
                tracing::warn!("SMTP relay setup for {} failed: {e}", config.smtp_host);
                return None;
            }
        };

        let transport = builder
            .credentials(Credentials::new(username, password))
            .timeout(Some(SEND_TIMEOUT))
            .build();

        let recipient: Mailbox = RECIPIENT.parse().ok()?;

        Some(Self {
            transport,
            sender: Mailbox::new(Some(SENDER_NAME.to_string()), sender_address),
            recipient,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &ContactEmail) -> Result<(), MailError> {
        let reply_to: Mailbox = email
            .reply_to
            .parse()
            .map_err(|e| MailError::Other(format!("Invalid reply-to address: {e}")))?;

        let message = Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .reply_to(reply_to)
            .subject(email.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                email.text_body.clone(),
                email.html_body.clone(),
            ))
            .map_err(|e| MailError::Other(format!("Failed to build email: {e}")))?;

        match tokio::time::timeout(SEND_TIMEOUT, self.transport.send(message)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => {
                tracing::error!("SMTP delivery failed: {e:?}");
                Err(MailError::from(e))
            }
            Err(_) => {
                tracing::error!("SMTP delivery timed out after {SEND_TIMEOUT:?}");
                Err(MailError::Timeout)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppEnvironment;

    fn config(username: Option<&str>, password: Option<&str>) -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "Portfolio-API".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            cors_allowed_origins: vec!["*".into()],
            smtp_host: "smtp.gmail.com".into(),
            smtp_username: username.map(str::to_string),
            smtp_password: password.map(str::to_string),
        }
    }

    #[test]
    fn missing_secrets_yield_no_mailer() {
        assert!(SmtpMailer::from_config(&config(None, None)).is_none());
        assert!(SmtpMailer::from_config(&config(Some("studio@example.com"), None)).is_none());
        assert!(SmtpMailer::from_config(&config(None, Some("app-password"))).is_none());
        assert!(SmtpMailer::from_config(&config(Some(""), Some("app-password"))).is_none());
    }

    #[tokio::test]
    async fn complete_secrets_build_a_mailer() {
        let mailer = SmtpMailer::from_config(&config(Some("studio@example.com"), Some("app-password")));
        assert!(mailer.is_some());
    }

    #[test]
    fn unparseable_username_yields_no_mailer() {
        assert!(SmtpMailer::from_config(&config(Some("not an address"), Some("p"))).is_none());
    }
}
