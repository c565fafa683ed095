//! Image Blob Storage
//!
//! Opaque blob-write capability for uploaded images. The flow layer only
//! knows "store these bytes under this name, give me a public URL";
//! where the bytes land is an infrastructure decision.

use std::path::PathBuf;

use thiserror::Error;

/// Blob storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying write failed
    #[error("Failed to write blob: {0}")]
    Io(#[from] std::io::Error),
}

/// Image blob-write capability
#[trait_variant::make(ImageStore: Send)]
pub trait LocalImageStore {
    /// Store `bytes` under `file_name` and return the public URL.
    async fn put(&self, file_name: &str, bytes: &[u8]) -> Result<String, StorageError>;
}

/// Filesystem-backed image store
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
    public_base_url: String,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }
}

impl ImageStore for FsImageStore {
    async fn put(&self, file_name: &str, bytes: &[u8]) -> Result<String, StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.root.join(file_name);
        tokio::fs::write(&path, bytes).await?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Image stored");

        Ok(format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            file_name
        ))
    }
}
