use anyhow::{Context, anyhow};
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use log::{info, warn};

use crate::{Digest, DigestNotifier, StdResult};

/// The SMTP settings of the notifier.
#[derive(Debug, Clone, Default)]
pub struct SmtpSettings {
    /// The SMTP relay host, an empty host disables sending.
    pub host: String,

    /// The SMTP relay port.
    pub port: u16,

    /// The SMTP username.
    pub username: Option<String>,

    /// The SMTP password.
    pub password: Option<String>,
}

/// A notifier that emails the digest through an SMTP relay.
pub struct SmtpNotifier {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    sender: Mailbox,
    receiver: Mailbox,
}

impl SmtpNotifier {
    /// Creates a new `SmtpNotifier` instance.
    ///
    /// When no host is configured the notifier runs in no-op mode and only logs the digest.
    pub fn try_new(settings: &SmtpSettings, sender: &str, receiver: &str) -> StdResult<Self> {
        let sender = sender
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid sender email address: {sender}"))?;
        let receiver = receiver
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid receiver email address: {receiver}"))?;

        let transport = if settings.host.trim().is_empty() {
            warn!("SMTP host not configured; digests will only be logged");
            None
        } else {
            let builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
                .with_context(|| "Failed to configure SMTP transport")?
                .port(settings.port);
            let builder = match (&settings.username, &settings.password) {
                (Some(username), Some(password)) => {
                    builder.credentials(Credentials::new(username.to_owned(), password.to_owned()))
                }
                _ => builder,
            };

            Some(builder.build())
        };

        Ok(Self {
            transport,
            sender,
            receiver,
        })
    }

    /// Checks whether the notifier actually sends emails.
    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    fn build_message(&self, digest: &Digest) -> StdResult<Message> {
        Message::builder()
            .from(self.sender.clone())
            .to(self.receiver.clone())
            .subject(digest.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(digest.body())
            .map_err(|e| anyhow!("Failed to build email message: {e}"))
    }
}

#[async_trait::async_trait]
impl DigestNotifier for SmtpNotifier {
    async fn notify(&self, digest: &Digest) -> StdResult<()> {
        let message = self.build_message(digest)?;
        match &self.transport {
            Some(transport) => {
                let response = transport
                    .send(message)
                    .await
                    .map_err(|e| anyhow!("Failed to send email: {e}"))?;
                info!(
                    "Email sent! Listings: {}, response code: {}",
                    digest.listings().len(),
                    response.code()
                );
            }
            None => {
                info!(
                    "Notifier running in no-op mode; skipping email to {}:\n{}",
                    self.receiver,
                    digest.body()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::JobListing;

    use super::*;

    fn dummy_digest() -> Digest {
        Digest::try_new(vec![JobListing::new(
            "Python Developer",
            "",
            "http://example.com",
            "2024-01-01",
        )])
        .unwrap()
    }

    #[test]
    fn try_new_fails_on_invalid_sender() {
        SmtpNotifier::try_new(&SmtpSettings::default(), "not-an-email", "to@example.com")
            .err()
            .expect("Expected an invalid sender error");
    }

    #[test]
    fn try_new_fails_on_invalid_receiver() {
        SmtpNotifier::try_new(&SmtpSettings::default(), "from@example.com", "")
            .err()
            .expect("Expected an invalid receiver error");
    }

    #[test]
    fn notifier_without_host_is_disabled() {
        let notifier =
            SmtpNotifier::try_new(&SmtpSettings::default(), "from@example.com", "to@example.com")
                .unwrap();

        assert!(!notifier.is_enabled());
    }

    #[test]
    fn message_carries_digest_subject_and_body() {
        let notifier =
            SmtpNotifier::try_new(&SmtpSettings::default(), "from@example.com", "to@example.com")
                .unwrap();

        let message = notifier.build_message(&dummy_digest()).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("Subject: Interesting Job Listings"));
        assert!(formatted.contains("python developer - http://example.com (2024-01-01)"));
    }

    #[tokio::test]
    async fn notify_in_no_op_mode_succeeds() {
        let notifier =
            SmtpNotifier::try_new(&SmtpSettings::default(), "from@example.com", "to@example.com")
                .unwrap();

        notifier.notify(&dummy_digest()).await.unwrap();
    }
}
