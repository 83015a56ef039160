//! Wikilink resolution: `[[target]]` and `[[target|label]]`
//!
//! The lookup key (left of the first `|`) is matched against the page index
//! by title or path suffix. A published match becomes a link labelled with
//! the display text; anything else degrades to the display text alone.
//! Broken links are never errors.

use super::embeds::EmbedGuard;
use super::inline::{render_inline, InlinePasses};
use super::syntax::split_target;
use super::RenderContext;

/// Output form of a resolved link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// `[label](url)`, for text that goes through the markdown converter
    Markdown,
    /// `<a href="url">label</a>`, for HTML inserted directly into the page
    HtmlAnchor,
}

/// Resolve every wikilink in `text`. Embeds and highlights are left as-is.
pub async fn resolve_links(ctx: RenderContext<'_>, text: &str, style: LinkStyle) -> String {
    let passes = InlinePasses {
        links: Some(style),
        ..InlinePasses::NONE
    };
    render_inline(ctx, text, passes, &EmbedGuard::new()).await
}

pub(crate) async fn render_link(ctx: RenderContext<'_>, target: &str, style: LinkStyle) -> String {
    let (key, display) = split_target(target);

    match ctx.pages.find_by_title_or_path_suffix(key).await {
        Some(page) if page.is_published => format_link(display, &ctx.urls.page_url(page.id), style),
        Some(page) => {
            tracing::debug!("Link target '{}' is unpublished (page {})", key, page.id);
            display.to_string()
        }
        None => {
            tracing::debug!("Link target '{}' not found", key);
            display.to_string()
        }
    }
}

pub fn format_link(label: &str, url: &str, style: LinkStyle) -> String {
    match style {
        LinkStyle::Markdown => format!("[{}]({})", label, url),
        LinkStyle::HtmlAnchor => format!(r#"<a href="{}">{}</a>"#, escape_attr(url), label),
    }
}

/// Escape a value for a double-quoted HTML attribute
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
