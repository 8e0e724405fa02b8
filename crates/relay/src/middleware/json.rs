use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use tracing::warn;

/// `Json<T>` whose rejections use the API error envelope.
pub struct InquiryJson<T>(pub T);

impl<S, T> FromRequest<S> for InquiryJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let details = rejection.body_text();
                warn!(status = %rejection.status(), "Rejected inquiry body: {details}");

                HttpError::Rejected {
                    status: rejection.status(),
                    message: "Invalid JSON body.".to_string(),
                    details: Some(details),
                }
            })?;

        Ok(Self(value))
    }
}
