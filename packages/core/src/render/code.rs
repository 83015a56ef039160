//! Fenced code block highlighting
//!
//! Fenced blocks with a language are highlighted with syntect into classed
//! `<span>`s (`hl-` prefix). The matching theme stylesheet comes from
//! [`code_highlight_css`] and is shipped with every page.

use pulldown_cmark::{CodeBlockKind, Event, Tag, TagEnd};
use std::sync::LazyLock;
use syntect::highlighting::ThemeSet;
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

const CODE_THEME: &str = "InspiredGitHub";

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

static CODE_THEME_CSS: LazyLock<String> = LazyLock::new(|| {
    let themes = ThemeSet::load_defaults();
    themes
        .themes
        .get(CODE_THEME)
        .and_then(|theme| css_for_theme_with_class_style(theme, code_class_style()).ok())
        .unwrap_or_default()
});

fn code_class_style() -> ClassStyle {
    ClassStyle::SpacedPrefixed { prefix: "hl-" }
}

/// Stylesheet for the spans emitted by [`highlight_code_blocks`]
pub fn code_highlight_css() -> &'static str {
    &CODE_THEME_CSS
}

/// Replace fenced code blocks that name a language with highlighted HTML.
///
/// Blocks without a language are left to the default renderer.
pub fn highlight_code_blocks<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut output = Vec::new();
    let mut block: Option<(String, String)> = None;

    for event in events {
        if let Some((_, source)) = block.as_mut() {
            match event {
                Event::Text(text) => source.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((language, source)) = block.take() {
                        output.push(Event::Html(highlighted_block(&language, &source).into()));
                    }
                }
                other => output.push(other),
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))
                if !code_language(&info).is_empty() =>
            {
                block = Some((code_language(&info).to_string(), String::new()));
            }
            other => output.push(other),
        }
    }

    output
}

/// First token of a fence info string (`rust,ignore` and `rust title` give `rust`)
fn code_language(info: &str) -> &str {
    info.split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .unwrap_or("")
}

fn highlighted_block(language: &str, source: &str) -> String {
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>\n",
        escape_html(language),
        highlight_source(language, source)
    )
}

fn highlight_source(language: &str, source: &str) -> String {
    let syntax = SYNTAX_SET
        .find_syntax_by_token(language)
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, code_class_style());
    for line in LinesWithEndings::from(source) {
        if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
            tracing::warn!("Highlighting '{}' code block failed: {}", language, e);
            return escape_html(source);
        }
    }
    generator.finalize()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_language_first_token() {
        assert_eq!(code_language("rust"), "rust");
        assert_eq!(code_language("rust,ignore"), "rust");
        assert_eq!(code_language("python title=\"x\""), "python");
        assert_eq!(code_language(""), "");
    }

    #[test]
    fn test_unknown_language_is_escaped_plain_text() {
        let html = highlighted_block("nosuchlang", "a < b");
        assert!(html.starts_with(r#"<pre><code class="language-nosuchlang">"#));
        assert!(html.contains("a &lt; b"));
        assert!(!html.contains("a < b"));
    }

    #[test]
    fn test_theme_css_uses_prefixed_classes() {
        let css = code_highlight_css();
        assert!(!css.is_empty());
        assert!(css.contains(".hl-"));
    }
}
