//! Data Models
//!
//! This module contains the data structures shared by the rendering core:
//!
//! - `PageRecord` - A vault file known to the page index, with publish state
//! - `CanvasDocument` - Parsed canvas board (nodes + edges)
//! - `RenderedCanvas` - Render-ready canvas handed to the client-side layout
//!
//! Page records are owned by the page index; canvas documents and rendered
//! nodes are created per render call and discarded afterwards.

mod canvas;
mod page;

#[cfg(test)]
mod canvas_test;
#[cfg(test)]
mod page_test;

pub use canvas::{
    CanvasDocument, CanvasEdge, CanvasMetadata, CanvasNode, CanvasParseError, NodeGeometry,
    Position, RenderedCanvas, RenderedCanvasDocument, RenderedNode,
};
pub use page::{basename, normalize_path, FileType, PageId, PageRecord};
