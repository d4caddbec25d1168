use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use service::{
    errors::ServiceError,
    queries::{CreateQueryInput, SupportQuery, UpdateStatusInput},
};

use crate::{errors::ApiError, metrics, state::AppState};

/// Ids that are not integers cannot match any stored query.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| ServiceError::not_found("Query").into())
}

#[utoipa::path(
    post, path = "/api/query/new", tag = "query",
    request_body = crate::openapi::CreateQueryDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::SupportQueryDoc),
        (status = 400, description = "Missing issue or orderId", body = crate::openapi::MessageDoc),
        (status = 500, description = "Persistence error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateQueryInput>, JsonRejection>,
) -> Result<Json<SupportQuery>, ApiError> {
    let Json(input) = payload?;
    let q = state.queries.create(input).await?;
    metrics::QUERIES_CREATED_TOTAL.inc();
    Ok(Json(q))
}

#[utoipa::path(
    put, path = "/api/query/update/{id}", tag = "query",
    params(("id" = i32, Path, description = "Query id")),
    request_body = crate::openapi::UpdateStatusDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::SupportQueryDoc),
        (status = 404, description = "Query not found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Persistence error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusInput>, JsonRejection>,
) -> Result<Json<SupportQuery>, ApiError> {
    let id = parse_id(&id)?;
    let Json(input) = payload?;
    let q = state.queries.update_status(id, input).await?;
    metrics::QUERY_UPDATES_TOTAL.inc();
    Ok(Json(q))
}

#[utoipa::path(
    get, path = "/api/query/{id}", tag = "query",
    params(("id" = i32, Path, description = "Query id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SupportQueryDoc),
        (status = 404, description = "Query not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<SupportQuery>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.queries.get(id).await?))
}
