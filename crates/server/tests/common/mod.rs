#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::AppState;
use service::{
    carrier::RateClient,
    documents::{DocumentService, MemoryObjectStore, ObjectStore},
    queries::{InMemoryQueryRepository, QueryRepository, QueryService},
};

pub const BOUNDARY: &str = "----exportdeskboundary";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryObjectStore>,
    pub queries: Arc<InMemoryQueryRepository>,
}

pub fn frontend_dir() -> String {
    format!("{}/../../frontend", env!("CARGO_MANIFEST_DIR"))
}

/// App wired to in-memory backends and the given carrier URL.
pub fn memory_app(rates_url: &str) -> TestApp {
    let store = Arc::new(MemoryObjectStore::new("test-docs"));
    let queries = Arc::new(InMemoryQueryRepository::new());
    let state = AppState::new(
        RateClient::new(rates_url).expect("rate client"),
        DocumentService::new(store.clone()),
        QueryService::new(queries.clone() as Arc<dyn QueryRepository>),
    );
    TestApp { router: router(state), store, queries }
}

/// App with caller-provided backends.
pub fn custom_app(rates_url: &str, store: Arc<dyn ObjectStore>, repo: Arc<dyn QueryRepository>) -> Router {
    let state = AppState::new(
        RateClient::new(rates_url).expect("rate client"),
        DocumentService::new(store),
        QueryService::new(repo),
    );
    router(state)
}

pub fn router(state: AppState) -> Router {
    server::routes::build_router(state, CorsLayer::very_permissive(), &frontend_dir())
}

/// Serve `app` on an ephemeral localhost port; returns `http://host:port`.
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    format!("http://{}:{}", addr.ip(), addr.port())
}

/// A port with nothing listening on it.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{}/getRates", addr)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("encode")))
        .expect("request")
}

/// Hand-built multipart body; `parts` are `(field, file_name, bytes)`.
pub fn multipart_request(uri: &str, parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
    let mut body = Vec::new();
    for (field, file_name, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match file_name {
            Some(name) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{name}\"\r\n").as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
            }
            None => {
                body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{field}\"\r\n\r\n").as_bytes());
            }
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .expect("request")
}

pub async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, Option<String>, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.expect("infallible");
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    (status, content_type, bytes.to_vec())
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, bytes) = send_raw(app, req).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
