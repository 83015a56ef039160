//! Page dispatch: pick the note or canvas renderer by file type

use super::canvas::render_canvas_source;
use super::error::RenderError;
use super::note::render_note;
use super::RenderContext;
use crate::models::{FileType, PageRecord, RenderedCanvas};
use tracing::instrument;

#[derive(Debug, Clone)]
pub enum RenderedPage {
    Note { page: PageRecord, html: String },
    Canvas { page: PageRecord, canvas: RenderedCanvas },
}

impl RenderedPage {
    pub fn page(&self) -> &PageRecord {
        match self {
            RenderedPage::Note { page, .. } | RenderedPage::Canvas { page, .. } => page,
        }
    }
}

/// Read a page's source through the content store and render it.
///
/// Publish state is not checked here; that is the caller's decision.
///
/// # Errors
///
/// Returns `RenderError::SourceUnavailable` when a note's source cannot be
/// read. An unreadable canvas renders as the canvas error marker instead.
#[instrument(skip(ctx, page), fields(page_id = %page.id, path = %page.file_path))]
pub async fn render_page(
    ctx: RenderContext<'_>,
    page: &PageRecord,
) -> Result<RenderedPage, RenderError> {
    let source = ctx.content.read_text(&page.file_path).await;

    match page.file_type {
        FileType::Canvas => {
            let canvas = match source {
                Ok(source) => render_canvas_source(ctx, &source, page.id).await,
                Err(e) => {
                    tracing::error!("Error loading canvas file {}: {}", page.file_path, e);
                    RenderedCanvas::load_failed()
                }
            };
            Ok(RenderedPage::Canvas {
                page: page.clone(),
                canvas,
            })
        }
        FileType::Note => {
            let content = source.map_err(|e| {
                tracing::error!("Error rendering page {}: {}", page.id, e);
                RenderError::source_unavailable(page.id, &page.file_path, e)
            })?;
            let html = render_note(ctx, page.id, &content).await;
            Ok(RenderedPage::Note {
                page: page.clone(),
                html,
            })
        }
    }
}
