//! Embeds: `![[image.png]]` and `![[Note]]`
//!
//! Images become markdown images pointing at the file-serving URL, or an
//! `[Image not found: ...]` placeholder. Notes are looked up like wikilinks
//! and, when published, their content is inlined as a blockquote under an
//! "Embedded from" heading.
//!
//! # Cycles
//!
//! An [`EmbedGuard`] travels down the embed chain carrying the ids of every
//! page already being rendered. Embedding one of them again yields the
//! "could not embed" fallback instead of recursing. The page being rendered
//! is always the first entry.
//!
//! With the default `max_embed_depth` of 0 embedded notes are quoted
//! verbatim; their own links and embeds are not processed.

use super::inline::{render_inline, InlinePasses};
use super::links::{format_link, LinkStyle};
use super::syntax::split_target;
use super::RenderContext;
use crate::models::PageId;
use std::collections::HashSet;

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg"];

/// Pages already on the current embed chain, plus the chain depth
#[derive(Debug, Clone, Default)]
pub struct EmbedGuard {
    visited: HashSet<PageId>,
    depth: usize,
}

impl EmbedGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guard for rendering `page_id` at the top level
    pub fn for_page(page_id: PageId) -> Self {
        let mut guard = Self::new();
        guard.visited.insert(page_id);
        guard
    }

    pub fn contains(&self, page_id: PageId) -> bool {
        self.visited.contains(&page_id)
    }

    /// Number of embedded notes between the top-level page and here
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Guard for rendering the content of `page_id` one level down
    pub fn enter(&self, page_id: PageId) -> Self {
        let mut next = self.clone();
        next.visited.insert(page_id);
        next.depth += 1;
        next
    }
}

/// Expand every embed in `text`. Links and highlights are left as-is.
pub async fn resolve_embeds(ctx: RenderContext<'_>, text: &str) -> String {
    let passes = InlinePasses {
        embeds: true,
        ..InlinePasses::NONE
    };
    render_inline(ctx, text, passes, &EmbedGuard::new()).await
}

pub fn is_image_target(target: &str) -> bool {
    let lower = target.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

pub(crate) async fn render_embed(
    ctx: RenderContext<'_>,
    target: &str,
    guard: &EmbedGuard,
) -> String {
    let (key, _) = split_target(target);
    if is_image_target(key) {
        embed_image(ctx, key).await
    } else {
        embed_note(ctx, key, guard).await
    }
}

async fn embed_image(ctx: RenderContext<'_>, target: &str) -> String {
    if ctx.content.exists(target).await {
        format!("![{}]({})", target, ctx.urls.file_url(target))
    } else {
        tracing::debug!("Embedded image '{}' not found", target);
        format!("[Image not found: {}]", target)
    }
}

async fn embed_note(ctx: RenderContext<'_>, target: &str, guard: &EmbedGuard) -> String {
    let page = match ctx.pages.find_by_title_or_path_suffix(target).await {
        Some(page) if page.is_published => page,
        _ => {
            tracing::debug!("Embed target '{}' not found or unpublished", target);
            return format!("[Content not available: {}]", target);
        }
    };
    let url = ctx.urls.page_url(page.id);

    if guard.contains(page.id) {
        tracing::warn!(
            "Embed cycle: page {} is already being rendered, not embedding '{}'",
            page.id,
            target
        );
        return could_not_embed(target, &url);
    }

    let content = match ctx.content.read_text(&page.file_path).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to embed '{}': {}", target, e);
            return could_not_embed(target, &url);
        }
    };

    let body = if guard.depth() < ctx.options.max_embed_depth {
        let inner = guard.enter(page.id);
        render_inline(ctx, &content, InlinePasses::note(ctx.options), &inner).await
    } else {
        content
    };

    format!(
        "**Embedded from {}:**\n{}\n",
        format_link(&page.title, &url, LinkStyle::Markdown),
        quote_lines(&body)
    )
}

fn could_not_embed(target: &str, url: &str) -> String {
    format!("[Could not embed: {}]({})", target, url)
}

/// Prefix every line with `> `, starting on a fresh line
fn quote_lines(content: &str) -> String {
    let quoted: Vec<&str> = content.split('\n').collect();
    format!("\n> {}", quoted.join("\n> "))
}
