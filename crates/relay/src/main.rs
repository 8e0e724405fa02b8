use anyhow::{Context, Result};
use dotenv::dotenv;
use relay::{handler::AppRouter, state::AppState};
use shared::{
    config::Config,
    utils::{Telemetry, init_logger},
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = Telemetry::init_optional("relay", config.otel_endpoint.clone())
        .context("Failed to initialize telemetry")?;

    init_logger(
        telemetry.as_ref().map(|providers| providers.logger()),
        "relay",
        is_dev,
        is_enable_file,
    );

    info!("[Config] Allowed Origins: {}", config.allowed_origins);

    if config.email_config.credentials().is_none() {
        warn!("EMAIL_USER or EMAIL_PASS is not set, every inquiry will fail until both are");
    }

    let port = config.port;
    let state = AppState::new(config);

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    if let Some(providers) = telemetry {
        providers.shutdown()?;
    }

    Ok(())
}
