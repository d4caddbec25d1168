use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use service::carrier::RateQuoteInput;
use tracing::error;

use crate::{errors::ApiError, metrics, state::AppState};

#[utoipa::path(
    post, path = "/api/shipping/getRates", tag = "shipping",
    request_body = crate::openapi::RateRequestDoc,
    responses(
        (status = 200, description = "Carrier response, returned unmodified"),
        (status = 400, description = "Missing origin, destination or weight", body = crate::openapi::MessageDoc),
        (status = 500, description = "Error fetching rates", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_rates(
    State(state): State<AppState>,
    payload: Result<Json<RateQuoteInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    metrics::RATE_REQUESTS_TOTAL.inc();
    let Json(input) = payload?;
    let req = input.validate()?;

    match state.rates.fetch_rates(&req).await {
        Ok(upstream) => {
            let content_type = upstream.content_type.unwrap_or_else(|| "application/json".to_string());
            Ok(([(header::CONTENT_TYPE, content_type)], upstream.body).into_response())
        }
        Err(e) => {
            metrics::RATE_FAILURES_TOTAL.inc();
            error!(error = %e, url = %state.rates.rates_url(), "rate lookup failed");
            Err(ApiError::RatesUnavailable)
        }
    }
}
