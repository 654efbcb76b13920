//! Temporary-file Upload Storage Adapter - Implementation of UploadStorage.
//!
//! Each upload lands in its own uniquely named file under a base directory
//! (the OS temp dir by default) and is deleted once the analysis finishes.

use async_trait::async_trait;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tokio::fs;

use crate::ports::{StoredUpload, UploadStorage, UploadStorageError};

/// Prefix of every stored upload's file name.
const FILE_PREFIX: &str = "throw-upload-";

/// Upload storage backed by named temporary files.
#[derive(Debug, Clone)]
pub struct TempFileUploadStorage {
    base_dir: PathBuf,
    max_bytes: usize,
}

impl TempFileUploadStorage {
    /// Creates storage writing into `base_dir`, rejecting payloads above `max_bytes`.
    pub fn new(base_dir: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            base_dir: base_dir.into(),
            max_bytes,
        }
    }
}

/// Runs `write` against the open temp file and keeps it only on success.
///
/// A failed write drops `named`, which deletes the partial file.
fn keep_after_write<W>(
    mut named: NamedTempFile,
    size_bytes: u64,
    write: W,
) -> Result<StoredUpload, UploadStorageError>
where
    W: FnOnce(&mut std::fs::File) -> std::io::Result<()>,
{
    write(named.as_file_mut()).map_err(|e| UploadStorageError::Io(e.to_string()))?;
    let (_file, path) = named
        .keep()
        .map_err(|e| UploadStorageError::Io(e.to_string()))?;
    Ok(StoredUpload::new(path, size_bytes))
}

#[async_trait]
impl UploadStorage for TempFileUploadStorage {
    async fn persist(
        &self,
        payload: &[u8],
        suffix: &str,
    ) -> Result<StoredUpload, UploadStorageError> {
        if payload.len() > self.max_bytes {
            return Err(UploadStorageError::TooLarge {
                size: payload.len(),
                limit: self.max_bytes,
            });
        }

        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| UploadStorageError::Io(format!("Failed to create upload dir: {}", e)))?;

        let dir = self.base_dir.clone();
        let suffix = suffix.to_string();
        let bytes = payload.to_vec();

        tokio::task::spawn_blocking(move || {
            let named = tempfile::Builder::new()
                .prefix(FILE_PREFIX)
                .suffix(&suffix)
                .tempfile_in(&dir)
                .map_err(|e| UploadStorageError::Io(e.to_string()))?;
            keep_after_write(named, bytes.len() as u64, |file| {
                file.write_all(&bytes)?;
                file.sync_all()
            })
        })
        .await
        .map_err(|e| UploadStorageError::Io(format!("Upload writer panicked: {}", e)))?
    }

    async fn remove(&self, upload: &StoredUpload) -> Result<(), UploadStorageError> {
        match fs::remove_file(upload.path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(UploadStorageError::Io(format!(
                "Failed to remove {}: {}",
                upload.path().display(),
                e
            ))),
        }
    }
}
