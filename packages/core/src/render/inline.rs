//! Single-pass inline rendering over scanner segments
//!
//! Each caller enables the passes it needs; disabled constructs are copied
//! through verbatim. Highlight payloads are scanned once more for links and
//! embeds (they cannot contain another highlight). Text produced by a
//! resolver is never re-scanned at the same level.

use super::embeds::{self, EmbedGuard};
use super::highlight::{self, HighlightMode};
use super::links::{self, LinkStyle};
use super::syntax::{tokenize, Segment};
use super::{RenderContext, RenderOptions};
use futures::future::{BoxFuture, FutureExt};

/// Which constructs an inline pass rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlinePasses {
    pub highlights: Option<HighlightMode>,
    pub links: Option<LinkStyle>,
    pub embeds: bool,
}

impl InlinePasses {
    pub const NONE: InlinePasses = InlinePasses {
        highlights: None,
        links: None,
        embeds: false,
    };

    /// Note bodies: highlights, markdown links and embeds
    pub fn note(options: &RenderOptions) -> Self {
        Self {
            highlights: Some(options.note_highlights),
            links: Some(LinkStyle::Markdown),
            embeds: true,
        }
    }

    /// Canvas text and previews: highlights and HTML anchors, no embeds
    pub fn canvas(options: &RenderOptions) -> Self {
        Self {
            highlights: Some(options.canvas_highlights),
            links: Some(LinkStyle::HtmlAnchor),
            embeds: false,
        }
    }
}

/// Render `text` with the enabled passes.
///
/// Recursive through embeds; depth is bounded by
/// `RenderOptions::max_embed_depth` and the guard.
pub(crate) fn render_inline<'a>(
    ctx: RenderContext<'a>,
    text: &'a str,
    passes: InlinePasses,
    guard: &'a EmbedGuard,
) -> BoxFuture<'a, String> {
    async move {
        let mut out = String::with_capacity(text.len());

        for segment in tokenize(text) {
            match segment {
                Segment::Highlight { color, payload, .. } => {
                    match passes.highlights {
                        Some(mode) => out.push_str(&highlight::open_tag(color, mode)),
                        None => {
                            out.push_str("={");
                            out.push_str(color);
                            out.push('}');
                        }
                    }
                    for inner in tokenize(payload) {
                        render_leaf(ctx, inner, passes, guard, &mut out).await;
                    }
                    out.push_str(match passes.highlights {
                        Some(_) => highlight::CLOSE_TAG,
                        None => "=",
                    });
                }
                leaf => render_leaf(ctx, leaf, passes, guard, &mut out).await,
            }
        }

        out
    }
    .boxed()
}

async fn render_leaf(
    ctx: RenderContext<'_>,
    segment: Segment<'_>,
    passes: InlinePasses,
    guard: &EmbedGuard,
    out: &mut String,
) {
    match (segment, passes.links) {
        (Segment::Link { target, .. }, Some(style)) => {
            out.push_str(&links::render_link(ctx, target, style).await);
        }
        (Segment::Embed { target, .. }, _) if passes.embeds => {
            out.push_str(&embeds::render_embed(ctx, target, guard).await);
        }
        (other, _) => out.push_str(other.raw()),
    }
}
