use anyhow::{Context, Result};

use crate::config::AllowedOrigins;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;

/// Reads a variable through `lookup`, treating blank values as unset.
fn read<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn read_port<F>(lookup: &F, key: &str, default: u16) -> Result<u16>
where
    F: Fn(&str) -> Option<String>,
{
    match read(lookup, key) {
        Some(value) => value
            .parse::<u16>()
            .with_context(|| format!("{key} must be a valid u16 integer, got '{value}'")),
        None => Ok(default),
    }
}

/// Outbound relay settings.
///
/// Credentials are optional here: a missing `EMAIL_USER`/`EMAIL_PASS` is
/// reported per request by the mailer, not at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    pub recipient: Option<String>,
}

impl EmailConfig {
    pub fn init() -> Result<Self> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let smtp_server =
            read(lookup, "SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());
        let smtp_port = read_port(lookup, "SMTP_PORT", DEFAULT_SMTP_PORT)?;

        Ok(Self {
            smtp_server,
            smtp_port,
            smtp_user: read(lookup, "EMAIL_USER"),
            smtp_pass: read(lookup, "EMAIL_PASS"),
            recipient: read(lookup, "EMAIL_TO"),
        })
    }

    /// Username and password, only when both are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.smtp_user, &self.smtp_pass) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }

    /// Where inquiries are delivered. Falls back to the sending mailbox.
    pub fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref().or(self.smtp_user.as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: AllowedOrigins,
    pub email_config: EmailConfig,
    pub otel_endpoint: Option<String>,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = read_port(lookup, "PORT", DEFAULT_PORT)?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| AllowedOrigins::parse(&raw))
            .unwrap_or_default();

        let email_config = EmailConfig::from_lookup(lookup).context("failed email config")?;

        Ok(Self {
            port,
            allowed_origins,
            email_config,
            otel_endpoint: read(lookup, "OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }
}
