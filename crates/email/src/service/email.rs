use crate::{abstract_trait::EmailServiceTrait, domain::EmailRequest};

use shared::{config::EmailConfig, errors::ServiceError};

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    message::{Mailbox, Message, header::ContentType},
    transport::smtp::{SUBMISSIONS_PORT, authentication::Credentials},
};
use tokio::sync::OnceCell;
use tracing::{error, info};

type SmtpTransport = AsyncSmtpTransport<Tokio1Executor>;

/// Delivers through an SMTP relay.
///
/// The transport (and its connection pool) is built on the first send and
/// reused by every later request.
pub struct EmailService {
    config: EmailConfig,
    mailer: OnceCell<SmtpTransport>,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            mailer: OnceCell::new(),
        }
    }

    async fn transport(
        &self,
        username: &str,
        password: &str,
    ) -> Result<&SmtpTransport, ServiceError> {
        self.mailer
            .get_or_try_init(|| async {
                let host = self.config.smtp_server.as_str();
                let creds = Credentials::new(username.to_string(), password.to_string());

                // 465 speaks TLS from the first byte, anything else upgrades.
                let builder = if self.config.smtp_port == SUBMISSIONS_PORT {
                    SmtpTransport::relay(host)
                } else {
                    SmtpTransport::starttls_relay(host)
                };

                let builder = builder.map_err(|e| {
                    error!("❌ Failed to create SMTP relay for {host}: {e}");
                    ServiceError::delivery(None, format!("Failed to create SMTP relay: {e}"))
                })?;

                let transport = builder
                    .credentials(creds)
                    .port(self.config.smtp_port)
                    .build();

                info!(host, port = self.config.smtp_port, "SMTP transport initialized");

                Ok::<_, ServiceError>(transport)
            })
            .await
    }
}

pub(crate) fn build_message(
    from: &str,
    to: &str,
    req: &EmailRequest,
) -> Result<Message, ServiceError> {
    let from: Mailbox = from.parse().map_err(|e| {
        error!("❌ Invalid sender email: {}", e);
        ServiceError::delivery(None, format!("Invalid sender email: {e}"))
    })?;

    let to: Mailbox = to.parse().map_err(|e| {
        error!("❌ Invalid recipient email: {}", e);
        ServiceError::delivery(None, format!("Invalid recipient email: {e}"))
    })?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(&req.subject)
        .header(ContentType::TEXT_HTML)
        .body(req.html.clone())
        .map_err(|e| {
            error!("❌ Failed to build email: {}", e);
            ServiceError::delivery(None, format!("Failed to build email: {e}"))
        })
}

#[async_trait]
impl EmailServiceTrait for EmailService {
    async fn send(&self, req: &EmailRequest) -> Result<(), ServiceError> {
        let Some((username, password)) = self.config.credentials() else {
            error!("❌ Email credentials missing, EMAIL_USER and EMAIL_PASS must be set");
            return Err(ServiceError::missing_credentials());
        };

        let recipient = self.config.recipient().unwrap_or(username);
        let email = build_message(username, recipient, req)?;

        let mailer = self.transport(username, password).await?;

        match mailer.send(email).await {
            Ok(_) => {
                info!("✅ Email sent to {}", recipient);
                Ok(())
            }
            Err(e) => {
                let code = e.status().map(|code| code.to_string());
                error!(?code, "❌ Failed to send email to {}: {}", recipient, e);
                Err(ServiceError::delivery(code, e.to_string()))
            }
        }
    }
}
