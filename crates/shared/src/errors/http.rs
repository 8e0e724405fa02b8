use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    /// A request the extractors refused, answered with their status.
    Rejected {
        status: StatusCode,
        message: String,
        details: Option<String>,
    },
    Internal {
        message: String,
        details: Option<String>,
    },
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();

        match err {
            ServiceError::Configuration { details, .. } => HttpError::Internal {
                message,
                details: Some(details),
            },
            ServiceError::Delivery { message: cause, .. } => HttpError::Internal {
                message,
                details: Some(cause),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            HttpError::Rejected {
                status,
                message,
                details,
            } => (status, message, details),
            HttpError::Internal { message, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, details)
            }
        };

        let body = Json(ErrorResponse { message, details });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_maps_to_internal() {
        let err = HttpError::from(ServiceError::missing_credentials());

        match err {
            HttpError::Internal { message, details } => {
                assert_eq!(
                    message,
                    "Server configuration error: Email credentials missing."
                );
                assert!(details.unwrap().contains("EMAIL_USER"));
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn delivery_error_keeps_relay_text_as_details() {
        let err = HttpError::from(ServiceError::delivery(
            Some("535".into()),
            "permanent error (535): authentication failed",
        ));

        match err {
            HttpError::Internal { message, details } => {
                assert_eq!(message, "Email sending failed. (Code: 535)");
                assert_eq!(
                    details.as_deref(),
                    Some("permanent error (535): authentication failed")
                );
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn statuses_match_variants() {
        assert_eq!(
            HttpError::Rejected {
                status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                message: "Invalid JSON body.".into(),
                details: None,
            }
            .into_response()
            .status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            HttpError::from(ServiceError::missing_credentials())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
