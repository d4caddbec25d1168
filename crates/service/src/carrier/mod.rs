//! Carrier rate API client.
//!
//! A dumb pass-through: the request is forwarded as-is and the upstream body
//! comes back untouched. No retry, no caching, no carrier selection.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::errors::ServiceError;

/// Raw rate request body; every field must be present.
/// `weight` is kept as raw JSON so whatever the caller sent reaches the carrier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateQuoteInput {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub weight: Option<serde_json::Value>,
}

impl RateQuoteInput {
    pub fn validate(self) -> Result<RateRequest, ServiceError> {
        Ok(RateRequest {
            origin: self.origin.ok_or_else(|| ServiceError::required("origin"))?,
            destination: self.destination.ok_or_else(|| ServiceError::required("destination"))?,
            weight: self.weight.ok_or_else(|| ServiceError::required("weight"))?,
        })
    }
}

/// Body forwarded to the carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRequest {
    pub origin: String,
    pub destination: String,
    pub weight: serde_json::Value,
}

/// Upstream response body, unmodified.
#[derive(Debug, Clone)]
pub struct UpstreamBody {
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Clone)]
pub struct RateClient {
    http: reqwest::Client,
    rates_url: String,
}

impl RateClient {
    /// Build a client for `rates_url`. No request timeout is configured: a hung carrier hangs the call.
    pub fn new(rates_url: impl Into<String>) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        Ok(Self::with_client(http, rates_url))
    }

    pub fn with_client(http: reqwest::Client, rates_url: impl Into<String>) -> Self {
        Self { http, rates_url: rates_url.into() }
    }

    pub fn rates_url(&self) -> &str { &self.rates_url }

    #[instrument(skip(self, req), fields(origin = %req.origin, destination = %req.destination))]
    pub async fn fetch_rates(&self, req: &RateRequest) -> Result<UpstreamBody, ServiceError> {
        debug!(url = %self.rates_url, "forwarding rate request");
        let resp = self
            .http
            .post(&self.rates_url)
            .json(req)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "carrier unreachable");
                ServiceError::Upstream(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "carrier returned error status");
            return Err(ServiceError::Upstream(format!("carrier responded with {status}")));
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.bytes().await.map_err(|e| ServiceError::Upstream(e.to_string()))?;
        info!(bytes = body.len(), "carrier rates received");
        Ok(UpstreamBody { content_type, body })
    }
}
