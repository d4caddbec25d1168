use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::{metrics, openapi::ApiDoc, state::AppState};

pub mod documents;
pub mod queries;
pub mod rates;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// API routes only; no static assets or middleware.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/shipping/getRates", post(rates::get_rates))
        // Uploads are not size-limited.
        .route("/api/documents/upload", post(documents::upload).layer(DefaultBodyLimit::disable()))
        .route("/api/query/new", post(queries::create))
        .route("/api/query/update/:id", put(queries::update_status))
        .route("/api/query/:id", get(queries::get))
}

/// Build the full application: API, health, metrics, docs and the web client.
pub fn build_router(state: AppState, cors: CorsLayer, frontend_dir: &str) -> Router {
    let static_dir = ServeDir::new(frontend_dir)
        .fallback(ServeFile::new(format!("{}/index.html", frontend_dir.trim_end_matches('/'))));

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler))
        .merge(api_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
