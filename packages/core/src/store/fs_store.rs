//! Filesystem-backed content store
//!
//! Reads files below a vault root. Every read is bounded by `read_timeout`;
//! an expired read is reported as [`ContentError::Timeout`].

use super::content_store::ContentStore;
use super::error::ContentError;
use async_trait::async_trait;
use std::future::Future;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncReadExt;

/// Default bound on a single file read
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
    read_timeout: Duration,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a vault-relative path to a file below the root.
    ///
    /// Rejects empty and absolute paths and any `..` component.
    fn resolve(&self, path: &str) -> Result<PathBuf, ContentError> {
        let normalized = path.replace('\\', "/");
        let relative = Path::new(&normalized);

        let is_contained = !normalized.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        if !is_contained {
            return Err(ContentError::invalid_path(path));
        }
        Ok(self.root.join(relative))
    }

    async fn bounded<T, F>(&self, path: &str, read: F) -> Result<T, ContentError>
    where
        F: Future<Output = std::io::Result<T>>,
    {
        match tokio::time::timeout(self.read_timeout, read).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(ContentError::from_io(path, e)),
            Err(_) => Err(ContentError::Timeout {
                path: path.to_string(),
                timeout: self.read_timeout,
            }),
        }
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn read_text(&self, path: &str) -> Result<String, ContentError> {
        let full_path = self.resolve(path)?;
        let bytes = self.bounded(path, tokio::fs::read(&full_path)).await?;
        String::from_utf8(bytes).map_err(|e| {
            ContentError::from_io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }

    async fn read_prefix(&self, path: &str, max_chars: usize) -> Result<String, ContentError> {
        let full_path = self.resolve(path)?;
        // A char is at most 4 bytes, so this many bytes always covers max_chars
        let byte_limit = (max_chars as u64).saturating_mul(4);

        let bytes = self
            .bounded(path, async {
                let file = tokio::fs::File::open(&full_path).await?;
                let mut buf = Vec::new();
                file.take(byte_limit).read_to_end(&mut buf).await?;
                Ok::<_, std::io::Error>(buf)
            })
            .await?;

        let text = decode_prefix(&bytes).map_err(|e| {
            ContentError::from_io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })?;
        Ok(text.chars().take(max_chars).collect())
    }

    async fn exists(&self, path: &str) -> bool {
        let Ok(full_path) = self.resolve(path) else {
            return false;
        };
        self.bounded(path, tokio::fs::metadata(&full_path))
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    async fn read_bytes(&self, path: &str) -> Result<Vec<u8>, ContentError> {
        let full_path = self.resolve(path)?;
        self.bounded(path, tokio::fs::read(&full_path)).await
    }
}

/// Decode a byte prefix, tolerating a multi-byte char cut off at the end
fn decode_prefix(bytes: &[u8]) -> Result<&str, std::str::Utf8Error> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) if e.error_len().is_none() => std::str::from_utf8(&bytes[..e.valid_up_to()]),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (FsContentStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        for (path, content) in files {
            let full = temp_dir.path().join(path);
            std::fs::create_dir_all(full.parent().unwrap()).unwrap();
            std::fs::write(full, content).unwrap();
        }
        (FsContentStore::new(temp_dir.path()), temp_dir)
    }

    #[tokio::test]
    async fn test_read_text_and_missing() {
        let (store, _dir) = store_with(&[("notes/a.md", "# A\nbody")]);

        assert_eq!(store.read_text("notes/a.md").await.unwrap(), "# A\nbody");
        let err = store.read_text("notes/b.md").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_rejects_paths_outside_root() {
        let (store, _dir) = store_with(&[("a.md", "x")]);

        for path in ["../secret.md", "notes/../../etc/passwd", "/etc/passwd", ""] {
            let err = store.read_text(path).await.unwrap_err();
            assert!(
                matches!(err, ContentError::InvalidPath { .. }),
                "{path} should be rejected"
            );
            assert!(!store.exists(path).await);
        }
    }

    #[tokio::test]
    async fn test_read_prefix_counts_chars_not_bytes() {
        let (store, _dir) = store_with(&[("u.md", "héllo wörld")]);

        assert_eq!(store.read_prefix("u.md", 5).await.unwrap(), "héllo");
        assert_eq!(store.read_prefix("u.md", 100).await.unwrap(), "héllo wörld");
    }

    #[tokio::test]
    async fn test_exists_only_for_files() {
        let (store, _dir) = store_with(&[("img/photo.png", "png")]);

        assert!(store.exists("img/photo.png").await);
        assert!(!store.exists("img").await);
        assert!(!store.exists("img/missing.png").await);
    }

    #[test]
    fn test_decode_prefix_drops_partial_char() {
        let bytes = "aé".as_bytes();
        assert_eq!(decode_prefix(&bytes[..2]).unwrap(), "a");
        assert!(decode_prefix(&[0x61, 0xff, 0x61]).is_err());
    }
}
