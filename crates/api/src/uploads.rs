//! Filesystem storage for uploaded recipe images.
//!
//! Files land directly inside the configured uploads directory under a
//! randomized name; rows reference them as `images/uploads/<name>`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use recipebox_core::upload::{unique_image_name, uploaded_file_name, uploaded_image_path};

/// Handle to the uploads directory. Cheap to clone.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: Arc<PathBuf>,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Arc::new(dir.into()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the uploads directory (and parents) if missing.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(self.dir()).await
    }

    /// Write an upload under a unique name derived from `sanitized_name`.
    ///
    /// Returns the relative `image_path` to record on the recipe row.
    pub async fn save(&self, sanitized_name: &str, data: &[u8]) -> std::io::Result<String> {
        self.ensure_dir().await?;

        let stored_name = unique_image_name(sanitized_name);
        tokio::fs::write(self.dir.join(&stored_name), data).await?;

        tracing::debug!(stored_name = %stored_name, bytes = data.len(), "Stored recipe image");
        Ok(uploaded_image_path(&stored_name))
    }

    /// Resolve a recipe `image_path` to a file inside the uploads directory.
    ///
    /// Returns `None` for bundled assets such as the placeholder.
    pub fn local_path(&self, image_path: &str) -> Option<PathBuf> {
        uploaded_file_name(image_path).map(|name| self.dir.join(name))
    }

    /// Remove an uploaded image, ignoring paths that are not uploads.
    ///
    /// Failures are logged and otherwise ignored; a missing file is not an
    /// error.
    pub async fn remove(&self, image_path: &str) {
        let Some(path) = self.local_path(image_path) else {
            return;
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::debug!(path = %path.display(), "Removed recipe image"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove recipe image");
            }
        }
    }
}
