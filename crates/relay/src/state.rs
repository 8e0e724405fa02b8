use crate::{di::DependenciesInject, metrics::Metrics};
use email::{abstract_trait::DynEmailService, service::EmailService};
use prometheus_client::registry::Registry;
use shared::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// State backed by the SMTP relay described in `config`.
    pub fn new(config: Config) -> Self {
        let email_service =
            Arc::new(EmailService::new(config.email_config.clone())) as DynEmailService;

        Self::with_email_service(config, email_service)
    }

    pub fn with_email_service(config: Config, email_service: DynEmailService) -> Self {
        let metrics = Arc::new(Metrics::new());

        let mut registry = Registry::default();
        metrics.register(&mut registry);

        let di_container = DependenciesInject::new(email_service, metrics.clone());

        Self {
            config: Arc::new(config),
            di_container,
            registry: Arc::new(registry),
            metrics,
        }
    }
}
