use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static RATE_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("export_desk_rate_requests_total", "Rate quote requests received")
        .expect("register rate_requests_total")
});

pub static RATE_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("export_desk_rate_failures_total", "Rate quote requests the carrier failed")
        .expect("register rate_failures_total")
});

pub static UPLOADS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("export_desk_uploads_total", "Document upload requests received")
        .expect("register uploads_total")
});

pub static UPLOAD_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("export_desk_upload_failures_total", "Document uploads rejected by storage")
        .expect("register upload_failures_total")
});

pub static QUERIES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("export_desk_queries_created_total", "Support queries created")
        .expect("register queries_created_total")
});

pub static QUERY_UPDATES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("export_desk_query_updates_total", "Support query status updates applied")
        .expect("register query_updates_total")
});

/// Touch every counter so they show up in `/metrics` before first use.
pub fn init() {
    Lazy::force(&RATE_REQUESTS_TOTAL);
    Lazy::force(&RATE_FAILURES_TOTAL);
    Lazy::force(&UPLOADS_TOTAL);
    Lazy::force(&UPLOAD_FAILURES_TOTAL);
    Lazy::force(&QUERIES_CREATED_TOTAL);
    Lazy::force(&QUERY_UPDATES_TOTAL);
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

pub async fn metrics_handler() -> (StatusCode, String) {
    encode_metrics()
}
