//! Page Index Error Types
//!
//! Lookups never fail (a miss is `None`); these errors cover mutations of
//! publish state and loading/saving the JSON snapshot.

use crate::models::PageId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    /// No record with this id
    #[error("Page not found: {id}")]
    PageNotFound { id: PageId },

    /// Snapshot file could not be read or written
    #[error("Failed to access index snapshot at {}: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Snapshot file is not a valid record list
    #[error("Index snapshot is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IndexError {
    /// Create a page not found error
    pub fn page_not_found(id: PageId) -> Self {
        Self::PageNotFound { id }
    }

    /// Create a snapshot I/O error
    pub fn snapshot(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Snapshot {
            path: path.into(),
            source,
        }
    }
}
