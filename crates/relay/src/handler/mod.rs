mod inquiry;

use crate::{
    domain::response::api::ApiResponse,
    metrics::metrics_handler,
    middleware::cors::{cors_guard, cors_layer},
    state::AppState,
};
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router, middleware};
use shared::errors::ErrorResponse;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

pub use self::inquiry::inquiry_routes;

pub const HEALTH_MESSAGE: &str = "API is running.";

/// 100 KiB. Oversized bodies surface as a 413 from the JSON extractor.
pub const BODY_LIMIT: usize = 100 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_checker_handler,
        inquiry::landing_handler,
        inquiry::contact_handler,
        inquiry::product_handler,
    ),
    components(schemas(ApiResponse, ErrorResponse)),
    tags(
        (name = "Health", description = "Liveness endpoint"),
        (name = "Inquiry", description = "Form submissions relayed by email"),
    )
)]
struct ApiDoc;

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    )
)]
pub async fn health_checker_handler() -> impl IntoResponse {
    (StatusCode::OK, HEALTH_MESSAGE)
}

pub struct AppRouter;

impl AppRouter {
    pub fn router(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/", get(health_checker_handler))
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(inquiry_routes(shared_state.clone()));

        let (app_router, api) = api_router
            .layer(DefaultBodyLimit::max(BODY_LIMIT))
            .split_for_parts();

        app_router
            .route(
                "/api-docs/openapi.json",
                get(move || {
                    let api = api.clone();
                    async move { Json(api) }
                }),
            )
            .layer(cors_layer(&shared_state.config.allowed_origins))
            .layer(middleware::from_fn_with_state(
                shared_state.clone(),
                cors_guard,
            ))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::router(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📚 OpenAPI document: http://localhost:{port}/api-docs/openapi.json");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
