//! Content Store Abstraction
//!
//! Access to raw vault files by vault-relative path. Resolvers receive the
//! store explicitly; none of them touch the filesystem directly.

use super::error::ContentError;
use async_trait::async_trait;

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Read a whole file as UTF-8 text
    async fn read_text(&self, path: &str) -> Result<String, ContentError>;

    /// Read at most `max_chars` characters from the start of a file
    async fn read_prefix(&self, path: &str, max_chars: usize) -> Result<String, ContentError>;

    /// Whether a regular file exists at `path`. Never errors; anything that
    /// would prevent reading the file counts as absent.
    async fn exists(&self, path: &str) -> bool;

    /// Raw bytes, used to serve images and other attachments
    async fn read_bytes(&self, path: &str) -> Result<Vec<u8>, ContentError>;
}
