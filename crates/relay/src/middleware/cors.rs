//! Cross-origin gate.
//!
//! `cors_guard` refuses browser calls from origins outside the allow-list
//! before they reach any route (preflights included). The refusal is a bare
//! plain-text 500, not an API error body. Calls that pass get their CORS
//! response headers from `cors_layer`.

use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::config::AllowedOrigins;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::error;

pub const CORS_REJECTION: &str = "Not allowed by CORS";

pub async fn cors_guard(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    let allowed_origins = &state.config.allowed_origins;

    if !allowed_origins.allows(origin.as_deref()) {
        error!(
            origin = origin.as_deref().unwrap_or_default(),
            allowed = %allowed_origins,
            "CORS blocked: origin not in allow-list"
        );
        return (StatusCode::INTERNAL_SERVER_ERROR, CORS_REJECTION).into_response();
    }

    next.run(req).await
}

/// Echoes allowed origins with credentials, and answers preflights.
pub fn cors_layer(allowed_origins: &AllowedOrigins) -> CorsLayer {
    let allowed_origins = allowed_origins.clone();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|origin| allowed_origins.allows(Some(origin)))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
