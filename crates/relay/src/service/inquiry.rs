use crate::{
    domain::{requests::inquiry::Inquiry, response::api::ApiResponse},
    metrics::{Metrics, Status},
};
use email::abstract_trait::DynEmailService;
use shared::errors::ServiceError;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, error, info};

/// Composes an inquiry and hands it to the mail transport, one attempt.
#[derive(Clone)]
pub struct InquiryService {
    email: DynEmailService,
    metrics: Arc<Metrics>,
}

impl InquiryService {
    pub fn new(email: DynEmailService, metrics: Arc<Metrics>) -> Self {
        Self { email, metrics }
    }

    pub async fn submit<I>(&self, inquiry: &I) -> Result<ApiResponse, ServiceError>
    where
        I: Inquiry + Sync,
    {
        let start = Instant::now();
        let request = inquiry.to_email();

        debug!(form = %I::KIND, subject = %request.subject, "📨 Relaying inquiry");

        let result = self.email.send(&request).await;
        let elapsed = start.elapsed().as_secs_f64();

        match result {
            Ok(()) => {
                self.metrics.record(I::KIND, Status::Success, elapsed);
                info!(form = %I::KIND, "✅ Inquiry relayed");
                Ok(ApiResponse::email_sent())
            }
            Err(e) => {
                self.metrics.record(I::KIND, Status::Error, elapsed);
                error!(form = %I::KIND, "❌ Inquiry not relayed: {e}");
                Err(e)
            }
        }
    }
}
