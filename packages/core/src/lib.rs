//! Vault Garden Core
//!
//! Turns an Obsidian-style vault into a small published website: wikilinks
//! become links between published pages, embeds transclude images and other
//! notes, colored highlights become spans, and canvas boards are flattened
//! for a client-side layout script.
//!
//! # Architecture
//!
//! - **Explicit collaborators**: renderers read pages, files and URLs only
//!   through the [`index::PageIndex`], [`store::ContentStore`] and
//!   [`render::UrlBuilder`] traits carried in a [`render::RenderContext`]
//! - **Graceful degradation**: broken links, missing images and failed
//!   embeds become plain text or placeholders, never errors
//! - **Publish gate**: only published pages are linked, embedded or served
//!
//! # Modules
//!
//! - [`models`] - Page records and canvas documents
//! - [`index`] - Page index trait and in-memory implementation
//! - [`store`] - Content store trait, filesystem and in-memory stores
//! - [`render`] - Inline syntax, links, embeds, notes and canvases
//! - [`services`] - Vault scanning and the publishing service
//! - [`config`] - Environment configuration

pub mod config;
pub mod index;
pub mod models;
pub mod render;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigError, GardenConfig};
pub use index::{InMemoryPageIndex, PageIndex};
pub use models::*;
pub use render::{
    code_highlight_css, RenderContext, RenderOptions, RenderedPage, SiteUrls, UrlBuilder,
};
pub use services::{PublishError, PublishingService, ScanReport};
pub use store::{ContentStore, FsContentStore, InMemoryContentStore};
