//! Page Records
//!
//! A `PageRecord` describes one vault file known to the page index: where it
//! lives, what kind of file it is, and whether it is publicly visible.
//!
//! # Examples
//!
//! ```rust
//! use garden_core::models::{FileType, PageId, PageRecord};
//! use chrono::Utc;
//!
//! let mut page = PageRecord::new(PageId(1), "Welcome", "notes/welcome.md", Utc::now());
//! assert_eq!(page.file_type, FileType::Note);
//! assert!(!page.is_published);
//!
//! page.publish(Utc::now());
//! assert!(page.published_at.is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Opaque page identifier
///
/// Ids are totally ordered; when several pages match a link target the
/// lowest id wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of vault file a page was created from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Markdown note (`.md`)
    #[serde(rename = "markdown")]
    Note,
    /// JSON canvas board (`.canvas`)
    Canvas,
}

impl FileType {
    /// Derive the file type from a vault-relative path
    pub fn from_path(path: &str) -> Self {
        let is_canvas = Path::new(path)
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("canvas"))
            .unwrap_or(false);

        if is_canvas {
            FileType::Canvas
        } else {
            FileType::Note
        }
    }
}

/// One vault file tracked by the page index.
///
/// # Invariants
///
/// - `file_path` is unique within an index and always uses `/` separators
/// - `published_at` is `Some` exactly when `is_published` is true
///
/// Mutate publish state only through [`PageRecord::publish`] and
/// [`PageRecord::unpublish`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub id: PageId,
    pub title: String,
    pub file_path: String,
    pub file_type: FileType,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub last_modified: DateTime<Utc>,
}

impl PageRecord {
    /// Create an unpublished record; the file type is derived from the path
    pub fn new(
        id: PageId,
        title: impl Into<String>,
        file_path: impl Into<String>,
        last_modified: DateTime<Utc>,
    ) -> Self {
        let file_path = normalize_path(&file_path.into());
        Self {
            id,
            title: title.into(),
            file_type: FileType::from_path(&file_path),
            file_path,
            is_published: false,
            published_at: None,
            last_modified,
        }
    }

    pub fn publish(&mut self, at: DateTime<Utc>) {
        self.is_published = true;
        self.published_at = Some(at);
    }

    pub fn unpublish(&mut self) {
        self.is_published = false;
        self.published_at = None;
    }

    /// Case-insensitive match used by wikilinks and embeds.
    ///
    /// A record matches `key` when its title equals the key, or when its
    /// path ends with `key + ".md"`.
    pub fn matches_link_key(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        if self.title.to_lowercase() == key {
            return true;
        }
        self.file_path
            .to_lowercase()
            .ends_with(&format!("{}.md", key))
    }

    /// Last path segment, used as a fallback label
    pub fn file_name(&self) -> &str {
        basename(&self.file_path)
    }
}

/// Convert platform separators to `/` so lookups behave the same everywhere
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Last `/`-separated segment of a vault path
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
