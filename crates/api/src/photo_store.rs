//! On-disk storage for uploaded car photos.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tireshop_core::uploads;

/// Writes and removes files below a storage root.
///
/// Callers only ever see paths relative to the root; those are what the
/// database stores and what `/uploads` serves.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    root: PathBuf,
}

impl PhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a stored file.
    pub fn resolve(&self, relative_path: &str) -> PathBuf {
        self.root.join(relative_path)
    }

    /// Store a car photo under a fresh unique name, returning its relative path.
    pub async fn save_car_photo(&self, ext: &str, data: &[u8]) -> std::io::Result<String> {
        let relative = uploads::car_photo_path(&uuid::Uuid::new_v4().to_string(), ext);
        let path = self.resolve(&relative);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, data).await?;
        tracing::debug!(path = %relative, bytes = data.len(), "Stored photo");
        Ok(relative)
    }

    /// Remove a stored file. Best-effort: a missing file is fine and other
    /// failures are only logged.
    pub async fn remove(&self, relative_path: &str) {
        if !uploads::is_safe_relative_path(relative_path) {
            tracing::warn!(path = %relative_path, "Refusing to remove file outside storage root");
            return;
        }
        match tokio::fs::remove_file(self.resolve(relative_path)).await {
            Ok(()) => tracing::debug!(path = %relative_path, "Removed stored file"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(error = %e, path = %relative_path, "Failed to remove stored file")
            }
        }
    }
}
