//! Page Index Abstraction
//!
//! The rendering core only ever reads the page index. Every resolver receives
//! it explicitly (through `RenderContext`) rather than reaching for a global
//! record store, so tests and alternative backends can supply their own.

use crate::models::{PageId, PageRecord};
use async_trait::async_trait;

/// Read-only view of known vault pages used during rendering.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; renders for different requests may
/// run concurrently against the same index.
///
/// # Snapshot Semantics
///
/// Returned records are owned copies. A record's publish state may change in
/// the index right after a lookup; callers treat what they got as a
/// point-in-time snapshot.
#[async_trait]
pub trait PageIndex: Send + Sync {
    /// Resolve a wikilink or embed target.
    ///
    /// Matches a record whose title equals `key`, or whose file path ends in
    /// `key + ".md"`, both case-insensitively. When several records match,
    /// the one with the lowest [`PageId`] is returned.
    async fn find_by_title_or_path_suffix(&self, key: &str) -> Option<PageRecord>;

    /// Exact (case-sensitive) vault-relative path lookup, used by canvas file cards
    async fn find_by_exact_path(&self, path: &str) -> Option<PageRecord>;

    /// Lookup by id
    async fn get(&self, id: PageId) -> Option<PageRecord>;
}
