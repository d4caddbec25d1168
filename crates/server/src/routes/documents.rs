use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use service::documents::{StoredObject, UploadedFile};

use crate::{errors::ApiError, metrics, state::AppState};

pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub data: StoredObject,
}

#[utoipa::path(
    post, path = "/api/documents/upload", tag = "documents",
    request_body(content = crate::openapi::UploadFormDoc, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded successfully"),
        (status = 400, description = "No file provided", body = crate::openapi::MessageDoc),
        (status = 500, description = "Storage provider error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    metrics::UPLOADS_TOTAL.inc();
    let mut multipart = multipart?;

    let mut file = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;
        if let Some(file_name) = file_name {
            file = Some(UploadedFile { file_name, content_type, data });
        }
        break;
    }
    let file = file.ok_or_else(|| ApiError::Validation("No file provided".into()))?;

    match state.documents.upload(file).await {
        Ok(data) => Ok(Json(UploadResponse { message: "File uploaded successfully".into(), data })),
        Err(e) => {
            metrics::UPLOAD_FAILURES_TOTAL.inc();
            Err(e.into())
        }
    }
}
