//! In-memory content store for tests, benchmarks and previews of unsaved content

use super::content_store::ContentStore;
use super::error::ContentError;
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Entry {
    Text(String),
    /// Present but every read fails
    Unreadable,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    files: HashMap<String, Entry>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), Entry::Text(content.into()));
        self
    }

    /// Register a file that exists but cannot be read
    pub fn with_unreadable(mut self, path: impl Into<String>) -> Self {
        self.files.insert(path.into(), Entry::Unreadable);
        self
    }

    fn entry(&self, path: &str) -> Result<&str, ContentError> {
        match self.files.get(path) {
            Some(Entry::Text(text)) => Ok(text),
            Some(Entry::Unreadable) => Err(ContentError::from_io(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "unreadable"),
            )),
            None => Err(ContentError::not_found(path)),
        }
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn read_text(&self, path: &str) -> Result<String, ContentError> {
        self.entry(path).map(str::to_string)
    }

    async fn read_prefix(&self, path: &str, max_chars: usize) -> Result<String, ContentError> {
        self.entry(path)
            .map(|text| text.chars().take(max_chars).collect())
    }

    async fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    async fn read_bytes(&self, path: &str) -> Result<Vec<u8>, ContentError> {
        self.entry(path).map(|text| text.as_bytes().to_vec())
    }
}
