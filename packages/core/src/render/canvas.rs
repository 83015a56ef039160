//! Canvas rendering
//!
//! Flattens a parsed canvas into [`RenderedNode`]s for the client-side
//! layout script:
//!
//! - text cards: highlights and HTML wikilinks applied to the card text
//! - file cards: linked to the page with the exact same path when it is
//!   published; published notes also get a short preview
//! - link cards: URL plus a label (falls back to the URL)
//! - group cards: label only
//! - anything else: geometry only
//!
//! Edges are copied as-is. A canvas that cannot be parsed renders as the
//! single error marker [`RenderedCanvas::Failed`]; it never fails the page.

use super::embeds::EmbedGuard;
use super::inline::{render_inline, InlinePasses};
use super::RenderContext;
use crate::models::{
    basename, CanvasDocument, CanvasNode, PageId, RenderedCanvas, RenderedCanvasDocument,
    RenderedNode,
};
use tracing::instrument;

/// Appended to a preview that filled the whole read limit
const PREVIEW_ELLIPSIS: &str = "...";

/// Render a canvas from its JSON source
#[instrument(skip(ctx, source), fields(page_id = %page_id))]
pub async fn render_canvas_source(
    ctx: RenderContext<'_>,
    source: &str,
    page_id: PageId,
) -> RenderedCanvas {
    match CanvasDocument::parse(source) {
        Ok(document) => RenderedCanvas::Loaded(render_canvas(ctx, &document, page_id).await),
        Err(e) => {
            tracing::error!("Error loading canvas for page {}: {}", page_id, e);
            RenderedCanvas::load_failed()
        }
    }
}

pub async fn render_canvas(
    ctx: RenderContext<'_>,
    document: &CanvasDocument,
    page_id: PageId,
) -> RenderedCanvasDocument {
    tracing::debug!(
        "Rendering canvas for page {} ({} nodes, {} edges)",
        page_id,
        document.nodes.len(),
        document.edges.len()
    );

    let mut nodes = Vec::with_capacity(document.nodes.len());
    for node in &document.nodes {
        nodes.push(render_node(ctx, node).await);
    }

    RenderedCanvasDocument {
        metadata: document.metadata.clone(),
        nodes,
        edges: document.edges.clone(),
    }
}

async fn render_node(ctx: RenderContext<'_>, node: &CanvasNode) -> RenderedNode {
    let mut rendered = RenderedNode::from_geometry(node);
    let passes = InlinePasses::canvas(ctx.options);

    match node {
        CanvasNode::Text { text, .. } => {
            rendered.content = Some(render_inline(ctx, text, passes, &EmbedGuard::new()).await);
        }
        CanvasNode::File { file, label, .. } => {
            rendered.file = Some(file.clone());
            rendered.label = Some(label.clone().unwrap_or_else(|| basename(file).to_string()));

            let page = ctx
                .pages
                .find_by_exact_path(file)
                .await
                .filter(|page| page.is_published);

            if let Some(page) = page {
                rendered.url = Some(ctx.urls.page_url(page.id));
                if file.ends_with(".md") {
                    rendered.preview = build_preview(ctx, file, passes).await;
                }
            }
        }
        CanvasNode::Link { url, label, .. } => {
            rendered.url = Some(url.clone().unwrap_or_default());
            rendered.label = Some(
                label
                    .clone()
                    .or_else(|| url.clone())
                    .unwrap_or_else(|| "Link".to_string()),
            );
        }
        CanvasNode::Group { label, .. } => {
            rendered.label = label.clone();
        }
        CanvasNode::Other { kind, .. } => {
            tracing::debug!(
                "Passing through canvas node '{}' of unknown type {:?}",
                node.geometry().id,
                kind
            );
        }
    }

    rendered
}

/// First `preview_chars` chars of a note, with an ellipsis when the limit
/// was reached. Read failures drop the preview.
async fn build_preview(ctx: RenderContext<'_>, path: &str, passes: InlinePasses) -> Option<String> {
    let limit = ctx.options.preview_chars;

    let mut preview = match ctx.content.read_prefix(path, limit).await {
        Ok(preview) => preview,
        Err(e) => {
            tracing::warn!("Error creating preview for {}: {}", path, e);
            return None;
        }
    };

    if preview.chars().count() == limit {
        preview.push_str(PREVIEW_ELLIPSIS);
    }

    Some(render_inline(ctx, &preview, passes, &EmbedGuard::new()).await)
}
