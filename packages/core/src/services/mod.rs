//! Business Services
//!
//! - `PublishingService` - renders published pages, toggles publish state,
//!   serves vault files and persists the page index
//! - `scan_vault` - registers new vault files in the page index
//!
//! Services sit between the HTTP layer and the rendering core and own the
//! long-lived collaborators (index, content store, URL builder).

pub mod error;
pub mod publishing;
pub mod vault_scanner;

pub use error::{PublishError, ScanError};
pub use publishing::PublishingService;
pub use vault_scanner::{scan_vault, ScanReport};
