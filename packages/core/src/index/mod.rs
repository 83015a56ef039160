//! Page Index Layer
//!
//! The page index is the authoritative list of vault files selected for the
//! site, with their publish state:
//!
//! - [`PageIndex`] - read-only lookup trait consumed by the renderers
//! - [`InMemoryPageIndex`] - `BTreeMap`-backed implementation with publish
//!   toggling and JSON snapshot persistence

mod error;
mod memory_index;
mod page_index;

pub use error::IndexError;
pub use memory_index::InMemoryPageIndex;
pub use page_index::PageIndex;
