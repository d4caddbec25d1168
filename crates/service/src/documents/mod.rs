//! Document uploads to object storage.
//!
//! The storage key is the uploaded file's own name, so a second upload with
//! the same name replaces the first. Nothing namespaces or deduplicates keys.

pub mod store;
pub mod s3;
pub mod service;

pub use s3::S3ObjectStore;
pub use service::{DocumentService, UploadedFile};
pub use store::{MemoryObjectStore, ObjectStore, StoredObject};
