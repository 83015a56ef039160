//! Tests for the note pipeline and page dispatch

#[cfg(test)]
mod tests {
    use crate::models::{PageId, RenderedCanvas};
    use crate::render::test_support::{record, Fixture};
    use crate::render::{
        markdown_to_html, preprocess_note, render_note, render_page, HighlightMode, RenderError,
        RenderedPage,
    };

    #[test]
    fn test_markdown_extensions_enabled() {
        let html = markdown_to_html("~~gone~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n- [x] done\n");
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<table>"));
        assert!(html.contains(r#"type="checkbox""#));
    }

    #[test]
    fn test_fenced_code_is_highlighted() {
        let html = markdown_to_html("```rust\nfn main() {}\n```\n");
        assert!(html.starts_with(r#"<pre><code class="language-rust">"#));

        let code = &html[html.find("<pre>").unwrap()..html.find("</pre>").unwrap()];
        assert!(code.contains(r#"<span class="hl-"#));
        assert!(code.contains("main"));
    }

    #[test]
    fn test_code_without_language_is_plain() {
        let html = markdown_to_html("```\na < b\n```\n");
        assert_eq!(html, "<pre><code>a &lt; b\n</code></pre>\n");
    }

    #[tokio::test]
    async fn test_note_link_becomes_anchor() {
        let fixture = Fixture::new(vec![record(7, "Foo", "Foo.md", true)]);
        let html = render_note(fixture.ctx(), PageId(1), "Go to [[Foo]].").await;
        assert_eq!(html, "<p>Go to <a href=\"/page/7\">Foo</a>.</p>\n");
    }

    #[tokio::test]
    async fn test_note_highlight_uses_inline_style() {
        let fixture = Fixture::new(vec![]);
        let html = render_note(fixture.ctx(), PageId(1), "A ={red}hot= take").await;
        assert_eq!(
            html,
            "<p>A <span style=\"background-color: #ffcccc;\">hot</span> take</p>\n"
        );
    }

    #[tokio::test]
    async fn test_note_highlight_mode_is_configurable() {
        let mut fixture = Fixture::new(vec![]);
        fixture.options.note_highlights = HighlightMode::DataAttribute;
        let out = preprocess_note(fixture.ctx(), PageId(1), "={Blue}x=").await;
        assert_eq!(out, r#"<span data-highlight-color="blue">x</span>"#);
    }

    #[tokio::test]
    async fn test_link_inside_highlight_is_resolved() {
        let fixture = Fixture::new(vec![record(7, "Foo", "Foo.md", true)]);
        let out = preprocess_note(fixture.ctx(), PageId(1), "={yellow}see [[Foo]]=").await;
        assert_eq!(
            out,
            r#"<span style="background-color: #f5f55e;">see [Foo](/page/7)</span>"#
        );
    }

    #[tokio::test]
    async fn test_embedded_note_renders_as_blockquote() {
        let fixture =
            Fixture::new(vec![record(7, "Foo", "Foo.md", true)]).file("Foo.md", "quoted text");
        let html = render_note(fixture.ctx(), PageId(1), "![[Foo]]").await;
        assert!(html.contains(r#"<strong>Embedded from <a href="/page/7">Foo</a>:</strong>"#));
        assert!(html.contains("<blockquote>\n<p>quoted text</p>\n</blockquote>"));
    }

    #[tokio::test]
    async fn test_plain_note_is_plain_markdown() {
        let fixture = Fixture::new(vec![]);
        let out = preprocess_note(fixture.ctx(), PageId(1), "# Title\n\nNo custom syntax = here").await;
        assert_eq!(out, "# Title\n\nNo custom syntax = here");
    }

    #[tokio::test]
    async fn test_render_page_note() {
        let page = record(3, "Hello", "Hello.md", true);
        let fixture = Fixture::new(vec![page.clone()]).file("Hello.md", "# Hi");
        let rendered = render_page(fixture.ctx(), &page).await.unwrap();

        match rendered {
            RenderedPage::Note { page, html } => {
                assert_eq!(page.id, PageId(3));
                assert_eq!(html, "<h1>Hi</h1>\n");
            }
            other => panic!("expected a note, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_render_page_missing_note_source() {
        let page = record(3, "Gone", "Gone.md", true);
        let fixture = Fixture::new(vec![page.clone()]);
        let err = render_page(fixture.ctx(), &page).await.unwrap_err();

        match err {
            RenderError::SourceUnavailable { page_id, path, .. } => {
                assert_eq!(page_id, PageId(3));
                assert_eq!(path, "Gone.md");
            }
        }
    }

    #[tokio::test]
    async fn test_render_page_unreadable_canvas_is_marker() {
        let page = record(4, "Board", "Board.canvas", true);
        let fixture = Fixture::new(vec![page.clone()]).unreadable("Board.canvas");
        let rendered = render_page(fixture.ctx(), &page).await.unwrap();

        match rendered {
            RenderedPage::Canvas { canvas, .. } => assert_eq!(canvas, RenderedCanvas::load_failed()),
            other => panic!("expected a canvas, got {:?}", other),
        }
    }
}
