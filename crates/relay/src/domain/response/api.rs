use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const EMAIL_SENT: &str = "Email sent successfully.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    #[schema(example = "Email sent successfully.")]
    pub message: String,
}

impl ApiResponse {
    pub fn email_sent() -> Self {
        Self {
            message: EMAIL_SENT.to_string(),
        }
    }
}
