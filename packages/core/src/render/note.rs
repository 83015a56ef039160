//! Note rendering
//!
//! One inline pass (highlights, markdown wikilinks, embeds) followed by
//! markdown-to-HTML conversion with pulldown-cmark. Fenced code blocks with a
//! language are syntax highlighted server-side (see [`super::code`]).

use super::code::highlight_code_blocks;
use super::embeds::EmbedGuard;
use super::inline::{render_inline, InlinePasses};
use super::RenderContext;
use crate::models::PageId;
use pulldown_cmark::{html, Options, Parser};
use tracing::instrument;

/// Render a note body to HTML
#[instrument(skip(ctx, content), fields(page_id = %page_id, len = content.len()))]
pub async fn render_note(ctx: RenderContext<'_>, page_id: PageId, content: &str) -> String {
    let markdown = preprocess_note(ctx, page_id, content).await;
    markdown_to_html(&markdown)
}

/// The inline pass alone: note syntax rewritten into plain markdown
pub async fn preprocess_note(ctx: RenderContext<'_>, page_id: PageId, content: &str) -> String {
    let guard = EmbedGuard::for_page(page_id);
    render_inline(ctx, content, InlinePasses::note(ctx.options), &guard).await
}

/// Convert markdown to HTML (tables, footnotes, strikethrough, task lists,
/// highlighted code).
///
/// Inline HTML such as highlight spans passes through unchanged.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, highlight_code_blocks(parser).into_iter());
    html_output
}
