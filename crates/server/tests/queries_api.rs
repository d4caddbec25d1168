mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, http::{Request, StatusCode}};
use serde_json::json;

use common::{custom_app, json_request, memory_app, send};
use service::{
    documents::MemoryObjectStore,
    errors::ServiceError,
    queries::{NewQuery, QueryRepository, SupportQuery},
};

const RATES: &str = "http://127.0.0.1:9/getRates";

#[tokio::test]
async fn create_returns_open_query_with_id() {
    let app = memory_app(RATES);
    let (status, body) = send(
        &app.router,
        json_request("POST", "/api/query/new", json!({"issue": "Container delayed at port", "orderId": "EXP-1042"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "issue": "Container delayed at port", "orderId": "EXP-1042", "status": "open"})
    );
    assert_eq!(app.queries.all().await.len(), 1);
}

#[tokio::test]
async fn ids_increase_across_creates() {
    let app = memory_app(RATES);
    let mut ids = Vec::new();
    for n in 0..3 {
        let (_, body) = send(
            &app.router,
            json_request("POST", "/api/query/new", json!({"issue": format!("issue {n}"), "orderId": "EXP-1"})),
        )
        .await;
        ids.push(body["id"].as_i64().unwrap());
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {ids:?}");
}

#[tokio::test]
async fn update_changes_only_status() {
    let app = memory_app(RATES);
    let (_, created) = send(
        &app.router,
        json_request("POST", "/api/query/new", json!({"issue": "Wrong HS code", "orderId": "EXP-7"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) =
        send(&app.router, json_request("PUT", &format!("/api/query/update/{id}"), json!({"status": "resolved"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": id, "issue": "Wrong HS code", "orderId": "EXP-7", "status": "resolved"}));

    let get = Request::builder().uri(format!("/api/query/{id}")).body(Body::empty()).unwrap();
    let (status, fetched) = send(&app.router, get).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn repeated_update_is_idempotent() {
    let app = memory_app(RATES);
    send(&app.router, json_request("POST", "/api/query/new", json!({"issue": "Late", "orderId": "EXP-2"}))).await;

    let (_, first) = send(&app.router, json_request("PUT", "/api/query/update/1", json!({"status": "in-progress"}))).await;
    let (status, second) =
        send(&app.router, json_request("PUT", "/api/query/update/1", json!({"status": "in-progress"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let app = memory_app(RATES);
    let (status, body) =
        send(&app.router, json_request("PUT", "/api/query/update/999", json!({"status": "resolved"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Query not found"}));
    assert!(app.queries.all().await.is_empty());
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let app = memory_app(RATES);
    let (status, body) =
        send(&app.router, json_request("PUT", "/api/query/update/abc", json!({"status": "resolved"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Query not found"}));
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let app = memory_app(RATES);
    let (status, body) = send(&app.router, json_request("POST", "/api/query/new", json!({"issue": "No order"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "orderId is required"}));

    send(&app.router, json_request("POST", "/api/query/new", json!({"issue": "x", "orderId": "y"}))).await;
    let (status, body) = send(&app.router, json_request("PUT", "/api/query/update/1", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "status is required"}));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = memory_app(RATES);
    let req = Request::builder()
        .method("POST")
        .uri("/api/query/new")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app.router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

struct DownRepository;

#[async_trait]
impl QueryRepository for DownRepository {
    async fn create(&self, _new: NewQuery) -> Result<SupportQuery, ServiceError> {
        Err(ServiceError::Db("connection refused".into()))
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<SupportQuery>, ServiceError> {
        Err(ServiceError::Db("connection refused".into()))
    }

    async fn update_status(&self, _id: i32, _status: &str) -> Result<Option<SupportQuery>, ServiceError> {
        Err(ServiceError::Db("connection refused".into()))
    }
}

#[tokio::test]
async fn persistence_failure_returns_raw_error() {
    let app = custom_app(RATES, Arc::new(MemoryObjectStore::new("docs")), Arc::new(DownRepository));

    let (status, body) =
        send(&app, json_request("POST", "/api/query/new", json!({"issue": "Late", "orderId": "EXP-3"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "database error: connection refused"}));

    let (status, _) = send(&app, json_request("PUT", "/api/query/update/1", json!({"status": "closed"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
