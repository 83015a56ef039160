//! Note Linking and Rendering Pipeline
//!
//! Turns raw vault content into cross-linked, embeddable HTML:
//!
//! - [`syntax`] - single-pass scanner for `![[embed]]`, `[[link]]` and `={color}text=`
//! - [`highlight`] - colored highlight spans (two output modes)
//! - [`links`] - wikilink resolution against the page index
//! - [`embeds`] - image and note transclusion with a cycle guard
//! - [`note`] - note pipeline ending in markdown-to-HTML conversion
//! - [`code`] - server-side highlighting of fenced code blocks
//! - [`canvas`] - canvas graph flattening for client-side layout
//! - [`page`] - dispatch of a page record to the note or canvas renderer
//!
//! # Dependency Injection
//!
//! No resolver reaches for global state. Everything a render needs travels
//! in a [`RenderContext`]: the page index, the content store, the URL
//! builder and the render options. A context is `Copy` and lives
//! for the duration of one render.
//!
//! # Error Policy
//!
//! Missing or unpublished targets and failed embed/preview reads degrade to
//! plain text or placeholders. Malformed syntax is passed through. Only a
//! failure to read the requested page's own source is an error
//! ([`RenderError`]).

pub mod canvas;
pub mod code;
pub mod embeds;
mod error;
pub mod highlight;
mod inline;
pub mod links;
pub mod note;
pub mod page;
pub mod syntax;
mod urls;

#[cfg(test)]
mod note_test;
#[cfg(test)]
pub(crate) mod test_support;

pub use canvas::{render_canvas, render_canvas_source};
pub use code::code_highlight_css;
pub use embeds::{resolve_embeds, EmbedGuard};
pub use error::RenderError;
pub use highlight::{transform_highlights, HighlightMode};
pub use inline::InlinePasses;
pub use links::{resolve_links, LinkStyle};
pub use note::{markdown_to_html, preprocess_note, render_note};
pub use page::{render_page, RenderedPage};
pub use urls::{encode_vault_path, SiteUrls, UrlBuilder};

use crate::index::PageIndex;
use crate::store::ContentStore;

/// Characters read from a note for a canvas file-card preview
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// Render settings shared by all pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Highlight output for notes (rendered server-side)
    pub note_highlights: HighlightMode,
    /// Highlight output for canvas cards (colored by client CSS)
    pub canvas_highlights: HighlightMode,
    /// Preview length for canvas file cards, in chars
    pub preview_chars: usize,
    /// How many levels of embedded notes are themselves rendered.
    ///
    /// `0` quotes embedded notes verbatim (single pass).
    pub max_embed_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            note_highlights: HighlightMode::InlineStyle,
            canvas_highlights: HighlightMode::DataAttribute,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            max_embed_depth: 0,
        }
    }
}

/// Collaborators for one render call
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub pages: &'a dyn PageIndex,
    pub content: &'a dyn ContentStore,
    pub urls: &'a dyn UrlBuilder,
    pub options: &'a RenderOptions,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        pages: &'a dyn PageIndex,
        content: &'a dyn ContentStore,
        urls: &'a dyn UrlBuilder,
        options: &'a RenderOptions,
    ) -> Self {
        Self {
            pages,
            content,
            urls,
            options,
        }
    }
}
