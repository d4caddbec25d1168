use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::{
    config::{Builder as S3ConfigBuilder, Region},
    error::DisplayErrorContext,
    primitives::ByteStream,
    Client as S3Client,
};
use bytes::Bytes;
use chrono::Utc;
use configs::StorageConfig;
use tracing::{error, info};

use super::store::{ObjectStore, StoredObject};
use crate::errors::ServiceError;

/// S3 (or S3-compatible) bucket. Credentials come from the AWS provider chain.
pub struct S3ObjectStore {
    client: S3Client,
    bucket: String,
    region: String,
    endpoint: Option<String>,
}

impl S3ObjectStore {
    pub async fn from_config(cfg: &StorageConfig) -> Self {
        let base_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(cfg.region.clone()))
            .load()
            .await;
        let s3_config = client_config(S3ConfigBuilder::from(&base_config), cfg);

        info!(
            bucket = %cfg.bucket,
            region = %cfg.region,
            endpoint = ?cfg.endpoint,
            path_style = cfg.uses_path_style(),
            "s3 object store ready"
        );
        Self::new(S3Client::from_conf(s3_config), cfg)
    }

    pub fn new(client: S3Client, cfg: &StorageConfig) -> Self {
        Self {
            client,
            bucket: cfg.bucket.clone(),
            region: cfg.region.clone(),
            endpoint: cfg.endpoint.clone(),
        }
    }

    fn location(&self, key: &str) -> String {
        object_location(&self.bucket, &self.region, self.endpoint.as_deref(), key)
    }
}

/// Apply endpoint and addressing style on top of a base SDK config.
pub(crate) fn client_config(builder: S3ConfigBuilder, cfg: &StorageConfig) -> aws_sdk_s3::Config {
    let mut builder = builder.force_path_style(cfg.uses_path_style());
    if let Some(endpoint) = &cfg.endpoint {
        builder = builder.endpoint_url(endpoint);
    }
    builder.build()
}

/// Public URL of an object, path-style for custom endpoints.
pub(crate) fn object_location(bucket: &str, region: &str, endpoint: Option<&str>, key: &str) -> String {
    match endpoint {
        Some(ep) => format!("{}/{}/{}", ep.trim_end_matches('/'), bucket, key),
        None => format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key),
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn bucket(&self) -> &str { &self.bucket }

    async fn put_object(&self, key: &str, body: Bytes, content_type: Option<&str>) -> Result<StoredObject, ServiceError> {
        let size = body.len() as u64;
        let mut req = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body));
        if let Some(ct) = content_type {
            req = req.content_type(ct);
        }

        let out = req.send().await.map_err(|e| {
            let detail = DisplayErrorContext(&e).to_string();
            error!(bucket = %self.bucket, %key, error = %detail, "s3 put_object failed");
            ServiceError::Storage(detail)
        })?;

        Ok(StoredObject {
            bucket: self.bucket.clone(),
            key: key.to_string(),
            location: self.location(key),
            e_tag: out.e_tag().map(str::to_string),
            version_id: out.version_id().map(str::to_string),
            size,
            uploaded_at: Utc::now(),
        })
    }
}
