//! Render Error Types

use crate::models::PageId;
use crate::store::ContentError;
use thiserror::Error;

/// Fatal render failures.
///
/// Everything recoverable (missing link targets, failed embeds, corrupt
/// canvases) degrades inside the renderer and never shows up here.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The requested page's own source could not be read
    #[error("Failed to read source of page {page_id} at {path}: {source}")]
    SourceUnavailable {
        page_id: PageId,
        path: String,
        source: ContentError,
    },
}

impl RenderError {
    /// Create a source unavailable error
    pub fn source_unavailable(page_id: PageId, path: impl Into<String>, source: ContentError) -> Self {
        Self::SourceUnavailable {
            page_id,
            path: path.into(),
            source,
        }
    }
}
