use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service is missing settings it needs at request time.
    #[error("Server configuration error: {message}")]
    Configuration { message: String, details: String },

    /// The relay could not be reached or refused the message.
    #[error("Email sending failed.{}", code_suffix(.code))]
    Delivery {
        code: Option<String>,
        message: String,
    },
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_ref()
        .map(|c| format!(" (Code: {c})"))
        .unwrap_or_default()
}

impl ServiceError {
    pub fn missing_credentials() -> Self {
        ServiceError::Configuration {
            message: "Email credentials missing.".to_string(),
            details: "Please verify EMAIL_USER and EMAIL_PASS are set in the environment."
                .to_string(),
        }
    }

    pub fn delivery(code: Option<String>, message: impl Into<String>) -> Self {
        ServiceError::Delivery {
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_message_carries_the_code() {
        let err = ServiceError::delivery(Some("535".into()), "bad credentials");
        assert_eq!(err.to_string(), "Email sending failed. (Code: 535)");

        let err = ServiceError::delivery(None, "connection refused");
        assert_eq!(err.to_string(), "Email sending failed.");
    }

    #[test]
    fn missing_credentials_message() {
        assert_eq!(
            ServiceError::missing_credentials().to_string(),
            "Server configuration error: Email credentials missing."
        );
    }
}
