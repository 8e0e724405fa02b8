use crate::{
    domain::{
        requests::inquiry::{ContactRequest, LandingRequest, ProductRequest},
        response::api::ApiResponse,
    },
    middleware::json::InquiryJson,
    service::InquiryService,
    state::AppState,
};
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, routing::post};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/landing",
    tag = "Inquiry",
    request_body = LandingRequest,
    responses(
        (status = 200, description = "Inquiry relayed", body = ApiResponse),
        (status = 400, description = "Invalid JSON body", body = ErrorResponse),
        (status = 500, description = "Missing credentials or delivery failure", body = ErrorResponse)
    )
)]
pub async fn landing_handler(
    Extension(service): Extension<Arc<InquiryService>>,
    InquiryJson(body): InquiryJson<LandingRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.submit(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/contact",
    tag = "Inquiry",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Inquiry relayed", body = ApiResponse),
        (status = 400, description = "Invalid JSON body", body = ErrorResponse),
        (status = 500, description = "Missing credentials or delivery failure", body = ErrorResponse)
    )
)]
pub async fn contact_handler(
    Extension(service): Extension<Arc<InquiryService>>,
    InquiryJson(body): InquiryJson<ContactRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.submit(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/product",
    tag = "Inquiry",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Inquiry relayed", body = ApiResponse),
        (status = 400, description = "Invalid JSON body", body = ErrorResponse),
        (status = 500, description = "Missing credentials or delivery failure", body = ErrorResponse)
    )
)]
pub async fn product_handler(
    Extension(service): Extension<Arc<InquiryService>>,
    InquiryJson(body): InquiryJson<ProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.submit(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn inquiry_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/landing", post(landing_handler))
        .route("/contact", post(contact_handler))
        .route("/product", post(product_handler))
        .layer(Extension(app_state.di_container.inquiry_service.clone()))
}
