use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, instrument};

use super::store::{ObjectStore, StoredObject};
use crate::errors::ServiceError;

/// A single file taken from a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

pub struct DocumentService {
    store: Arc<dyn ObjectStore>,
}

impl DocumentService {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self { Self { store } }

    pub fn bucket(&self) -> &str { self.store.bucket() }

    /// Upload under the file's own name; an existing object with that name is replaced.
    #[instrument(skip(self, file), fields(file_name = %file.file_name, size = file.data.len()))]
    pub async fn upload(&self, file: UploadedFile) -> Result<StoredObject, ServiceError> {
        if file.file_name.is_empty() {
            return Err(ServiceError::Validation("No file provided".into()));
        }
        let stored = self
            .store
            .put_object(&file.file_name, file.data, file.content_type.as_deref())
            .await?;
        info!(bucket = %stored.bucket, key = %stored.key, "document_uploaded");
        Ok(stored)
    }
}
