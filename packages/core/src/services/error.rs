//! Service Layer Error Types
//!
//! Errors surfaced by the publishing service and the vault scanner. Lower
//! layers keep their own error enums; these wrap them with `#[from]` so
//! callers can use `?` across layers.

use crate::index::IndexError;
use crate::models::PageId;
use crate::render::RenderError;
use crate::store::ContentError;
use std::path::PathBuf;
use thiserror::Error;

/// Vault scan failures
#[derive(Error, Debug)]
pub enum ScanError {
    /// The configured vault directory does not exist
    #[error("Vault directory not found: {}", path.display())]
    VaultNotFound { path: PathBuf },

    /// The blocking scan task panicked or was cancelled
    #[error("Scan task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ScanError {
    /// Create a vault not found error
    pub fn vault_not_found(path: impl Into<PathBuf>) -> Self {
        Self::VaultNotFound { path: path.into() }
    }
}

/// Publishing service errors
#[derive(Error, Debug)]
pub enum PublishError {
    /// Unknown id, or a page that is not published
    #[error("Page not found: {id}")]
    PageNotFound { id: PageId },

    /// The page could not be rendered
    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    /// Page index operation failed
    #[error("Page index error: {0}")]
    Index(#[from] IndexError),

    /// Vault file could not be served
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Vault scan failed
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),
}

impl PublishError {
    /// Create a page not found error
    pub fn page_not_found(id: PageId) -> Self {
        Self::PageNotFound { id }
    }

    /// Whether this error means "nothing to show" rather than a failure
    pub fn is_not_found(&self) -> bool {
        match self {
            PublishError::PageNotFound { .. } => true,
            PublishError::Index(IndexError::PageNotFound { .. }) => true,
            PublishError::Content(e) => e.is_not_found(),
            _ => false,
        }
    }
}
