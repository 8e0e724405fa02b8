use serde::{Deserialize, Serialize};

/// A composed message. Sender and recipient come from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub subject: String,
    pub html: String,
}
