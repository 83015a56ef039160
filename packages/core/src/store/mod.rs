//! Content Store Layer
//!
//! Raw access to vault files by vault-relative path:
//!
//! - [`ContentStore`] - trait consumed by the renderers
//! - [`FsContentStore`] - reads below a vault root with a per-read timeout
//! - [`InMemoryContentStore`] - map-backed store for tests and benchmarks

mod content_store;
mod error;
mod fs_store;
mod memory_store;

pub use content_store::ContentStore;
pub use error::ContentError;
pub use fs_store::{FsContentStore, DEFAULT_READ_TIMEOUT};
pub use memory_store::InMemoryContentStore;
