//! In-memory page index
//!
//! Records are kept in a `BTreeMap` keyed by id, so iteration order is id
//! order and "first match" during lookup is always the lowest id. New records
//! get the next id after the current maximum.
//!
//! The index can be persisted as a JSON array of records so publish state
//! survives restarts.

use super::error::IndexError;
use super::page_index::PageIndex;
use crate::models::{normalize_path, PageId, PageRecord};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryPageIndex {
    pages: RwLock<BTreeMap<PageId, PageRecord>>,
}

impl InMemoryPageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from existing records. A later record with an already
    /// seen path is dropped to keep paths unique.
    pub fn from_records(records: impl IntoIterator<Item = PageRecord>) -> Self {
        let mut pages = BTreeMap::new();
        let mut seen_paths = std::collections::HashSet::new();
        for record in records {
            if seen_paths.insert(record.file_path.clone()) {
                pages.insert(record.id, record);
            }
        }
        Self {
            pages: RwLock::new(pages),
        }
    }

    /// Load a snapshot written by [`InMemoryPageIndex::save`].
    ///
    /// A missing file yields an empty index.
    pub async fn load(path: &Path) -> Result<Self, IndexError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No index snapshot at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(IndexError::snapshot(path, e)),
        };

        let records: Vec<PageRecord> = serde_json::from_slice(&bytes)?;
        tracing::info!(
            "Loaded {} page records from {}",
            records.len(),
            path.display()
        );
        Ok(Self::from_records(records))
    }

    /// Write all records as a JSON array
    pub async fn save(&self, path: &Path) -> Result<(), IndexError> {
        let records: Vec<PageRecord> = self.pages.read().await.values().cloned().collect();
        let json = serde_json::to_vec_pretty(&records)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| IndexError::snapshot(path, e))?;
            }
        }
        tokio::fs::write(path, json)
            .await
            .map_err(|e| IndexError::snapshot(path, e))
    }

    /// Insert an unpublished record unless the path is already indexed.
    ///
    /// Returns the new record, or `None` when the path was known.
    pub async fn insert_if_absent(
        &self,
        title: impl Into<String>,
        file_path: &str,
        last_modified: DateTime<Utc>,
    ) -> Option<PageRecord> {
        let file_path = normalize_path(file_path);
        let mut pages = self.pages.write().await;

        if pages.values().any(|p| p.file_path == file_path) {
            return None;
        }

        let next_id = pages.keys().next_back().map(|id| id.0 + 1).unwrap_or(1);
        let record = PageRecord::new(PageId(next_id), title, file_path, last_modified);
        pages.insert(record.id, record.clone());
        Some(record)
    }

    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pages.read().await.is_empty()
    }

    /// All records, most recently modified first
    pub async fn all(&self) -> Vec<PageRecord> {
        let mut records: Vec<PageRecord> = self.pages.read().await.values().cloned().collect();
        records.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        records
    }

    /// Published records, most recently published first
    pub async fn published(&self) -> Vec<PageRecord> {
        let mut records: Vec<PageRecord> = self
            .pages
            .read()
            .await
            .values()
            .filter(|p| p.is_published)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        records
    }

    /// Publish or unpublish a page
    pub async fn set_published(
        &self,
        id: PageId,
        published: bool,
        at: DateTime<Utc>,
    ) -> Result<PageRecord, IndexError> {
        let mut pages = self.pages.write().await;
        let record = pages
            .get_mut(&id)
            .ok_or_else(|| IndexError::page_not_found(id))?;

        if published {
            record.publish(at);
        } else {
            record.unpublish();
        }
        Ok(record.clone())
    }

    /// Flip the publish state of a page
    pub async fn toggle_published(
        &self,
        id: PageId,
        at: DateTime<Utc>,
    ) -> Result<PageRecord, IndexError> {
        let mut pages = self.pages.write().await;
        let record = pages
            .get_mut(&id)
            .ok_or_else(|| IndexError::page_not_found(id))?;

        if record.is_published {
            record.unpublish();
        } else {
            record.publish(at);
        }
        Ok(record.clone())
    }
}

#[async_trait]
impl PageIndex for InMemoryPageIndex {
    async fn find_by_title_or_path_suffix(&self, key: &str) -> Option<PageRecord> {
        self.pages
            .read()
            .await
            .values()
            .find(|p| p.matches_link_key(key))
            .cloned()
    }

    async fn find_by_exact_path(&self, path: &str) -> Option<PageRecord> {
        let path = normalize_path(path);
        self.pages
            .read()
            .await
            .values()
            .find(|p| p.file_path == path)
            .cloned()
    }

    async fn get(&self, id: PageId) -> Option<PageRecord> {
        self.pages.read().await.get(&id).cloned()
    }
}
