//! Upload Storage Port - Transient storage for uploaded clips.
//!
//! Landmark sources read from a path, so uploads are written to short-lived
//! storage for the duration of one analysis and removed afterwards.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Handle to one stored upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    path: PathBuf,
    size_bytes: u64,
}

impl StoredUpload {
    pub fn new(path: PathBuf, size_bytes: u64) -> Self {
        Self { path, size_bytes }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

/// Port for transient upload storage.
#[async_trait]
pub trait UploadStorage: Send + Sync {
    /// Write `payload` to a fresh file whose name ends with `suffix`.
    ///
    /// # Errors
    ///
    /// `TooLarge` when the payload exceeds the configured limit.
    async fn persist(&self, payload: &[u8], suffix: &str)
        -> Result<StoredUpload, UploadStorageError>;

    /// Delete a stored upload.
    async fn remove(&self, upload: &StoredUpload) -> Result<(), UploadStorageError>;
}

/// Errors from upload storage.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UploadStorageError {
    #[error("Upload of {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<UploadStorageError> for DomainError {
    fn from(err: UploadStorageError) -> Self {
        let code = match err {
            UploadStorageError::TooLarge { .. } => ErrorCode::PayloadTooLarge,
            UploadStorageError::Io(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}
