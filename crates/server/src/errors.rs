use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::{ErrorBody, MessageBody};
use service::errors::ServiceError;
use tracing::error;

pub const RATES_ERROR: &str = "Error fetching rates";

/// Every failure the HTTP surface can produce.
#[derive(Debug)]
pub enum ApiError {
    /// Carrier call failed; the cause is logged, never returned.
    RatesUnavailable,
    Validation(String),
    NotFound(String),
    /// Upstream, storage or persistence failure with its raw detail.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::RatesUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(RATES_ERROR))).into_response()
            }
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, Json(MessageBody::new(msg))).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, Json(MessageBody::new(msg))).into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(msg))).into_response()
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::Validation(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Upstream(_) => ApiError::RatesUnavailable,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self { ApiError::Validation(r.body_text()) }
}

impl From<MultipartRejection> for ApiError {
    fn from(r: MultipartRejection) -> Self { ApiError::Validation(r.body_text()) }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self { ApiError::Validation(e.body_text()) }
}
