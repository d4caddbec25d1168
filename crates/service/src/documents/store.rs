use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// What the storage provider reports back for a completed upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub location: String,
    pub e_tag: Option<String>,
    pub version_id: Option<String>,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
}

/// Blob storage seam: one call, one outcome.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    fn bucket(&self) -> &str;

    /// Write `body` under `key`, replacing any existing object.
    async fn put_object(&self, key: &str, body: Bytes, content_type: Option<&str>) -> Result<StoredObject, ServiceError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryBlob {
    pub body: Bytes,
    pub content_type: Option<String>,
}

/// Process-local store used when no bucket is configured.
pub struct MemoryObjectStore {
    bucket: String,
    objects: DashMap<String, MemoryBlob>,
}

impl MemoryObjectStore {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self { bucket: bucket.into(), objects: DashMap::new() }
    }

    pub fn get(&self, key: &str) -> Option<MemoryBlob> {
        self.objects.get(key).map(|b| b.value().clone())
    }

    pub fn len(&self) -> usize { self.objects.len() }

    pub fn is_empty(&self) -> bool { self.objects.is_empty() }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    fn bucket(&self) -> &str { &self.bucket }

    async fn put_object(&self, key: &str, body: Bytes, content_type: Option<&str>) -> Result<StoredObject, ServiceError> {
        let size = body.len() as u64;
        self.objects.insert(
            key.to_string(),
            MemoryBlob { body, content_type: content_type.map(str::to_string) },
        );
        Ok(StoredObject {
            bucket: self.bucket.clone(),
            key: key.to_string(),
            location: format!("memory://{}/{}", self.bucket, key),
            e_tag: None,
            version_id: None,
            size,
            uploaded_at: Utc::now(),
        })
    }
}
