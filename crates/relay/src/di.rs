use std::sync::Arc;

use crate::{metrics::Metrics, service::InquiryService};
use email::abstract_trait::DynEmailService;

#[derive(Clone)]
pub struct DependenciesInject {
    pub inquiry_service: Arc<InquiryService>,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("inquiry_service", &"InquiryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(email_service: DynEmailService, metrics: Arc<Metrics>) -> Self {
        let inquiry_service = Arc::new(InquiryService::new(email_service, metrics));

        Self { inquiry_service }
    }
}
