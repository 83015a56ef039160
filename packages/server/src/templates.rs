//! HTML page shells
//!
//! Maud templates around the HTML produced by `garden-core`. Note bodies and
//! canvas card contents are already rendered; they are inserted unescaped.

use garden_core::models::{FileType, PageRecord, RenderedCanvas};
use garden_core::{code_highlight_css, UrlBuilder};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const SITE_NAME: &str = "Vault Garden";

const PAGE_CSS: &str = r#"
*{box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:#222;background:#fcfcfa;margin:0}
header{padding:1rem 1.5rem;border-bottom:1px solid #eee}
header a{color:#222;font-weight:600;text-decoration:none}
main{max-width:760px;margin:0 auto;padding:1.5rem}
a{color:#6b46c1}
blockquote{margin:1rem 0;padding:.25rem 1rem;border-left:3px solid #d6cdee;color:#444}
pre{background:#f4f4f4;padding:.75rem;overflow-x:auto;border-radius:6px}
img{max-width:100%}
.page-list{list-style:none;padding:0}
.page-list li{padding:.4rem 0;border-bottom:1px solid #f0f0f0}
.page-meta{color:#999;font-size:.85rem;margin-left:.5rem}
span[data-highlight-color="yellow"]{background-color:#f5f55e}
span[data-highlight-color="red"]{background-color:#ffcccc}
span[data-highlight-color="green"]{background-color:#ccffcc}
span[data-highlight-color="blue"]{background-color:#ccccff}
#canvas{position:relative;width:100%;height:80vh;overflow:auto;border:1px solid #eee;background:#fff}
#canvas .card{position:absolute;padding:.5rem .75rem;border:1px solid #ccc;border-radius:6px;background:#fff;overflow:hidden;font-size:.9rem}
#canvas .card.group{background:rgba(107,70,193,.05);border-style:dashed}
#canvas .preview{color:#666;font-size:.8rem;white-space:pre-wrap}
#canvas svg{position:absolute;left:0;top:0;pointer-events:none;overflow:visible}
.canvas-error{color:#b00}
"#;

/// Lays out rendered canvas cards from the `canvas-data` JSON block
const CANVAS_SCRIPT: &str = r#"
(function () {
  var data = JSON.parse(document.getElementById('canvas-data').textContent);
  var root = document.getElementById('canvas');
  if (data.error) { root.innerHTML = '<p class="canvas-error"></p>'; root.firstChild.textContent = data.error; return; }
  var minX = 0, minY = 0;
  data.nodes.forEach(function (n) { minX = Math.min(minX, n.position.x); minY = Math.min(minY, n.position.y); });
  var centers = {};
  data.nodes.forEach(function (n) {
    var el = document.createElement('div');
    el.className = 'card ' + n.type;
    el.style.left = (n.position.x - minX) + 'px';
    el.style.top = (n.position.y - minY) + 'px';
    el.style.width = n.width + 'px';
    el.style.height = n.height + 'px';
    if (n.type === 'text') { el.innerHTML = n.content || ''; }
    else if (n.type === 'file' || n.type === 'link') {
      var title = document.createElement(n.url ? 'a' : 'strong');
      if (n.url) { title.href = n.url; }
      title.textContent = n.label || n.file || n.url || '';
      el.appendChild(title);
      if (n.preview) { var p = document.createElement('div'); p.className = 'preview'; p.innerHTML = n.preview; el.appendChild(p); }
    } else if (n.label) { el.textContent = n.label; }
    root.appendChild(el);
    centers[n.id] = [n.position.x - minX + n.width / 2, n.position.y - minY + n.height / 2];
  });
  var svg = document.createElementNS('http://www.w3.org/2000/svg', 'svg');
  data.edges.forEach(function (e) {
    var a = centers[e.fromNode], b = centers[e.toNode];
    if (!a || !b) { return; }
    var line = document.createElementNS('http://www.w3.org/2000/svg', 'line');
    line.setAttribute('x1', a[0]); line.setAttribute('y1', a[1]);
    line.setAttribute('x2', b[0]); line.setAttribute('y2', b[1]);
    line.setAttribute('stroke', e.color); line.setAttribute('stroke-width', '2');
    svg.appendChild(line);
  });
  root.insertBefore(svg, root.firstChild);
})();
"#;

fn page_shell(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - " (SITE_NAME) }
                style { (PreEscaped(PAGE_CSS)) (PreEscaped(code_highlight_css())) }
            }
            body {
                header { a href="/" { (SITE_NAME) } }
                main { (body) }
            }
        }
    }
}

/// List of published pages
pub fn index_page(pages: &[PageRecord], urls: &dyn UrlBuilder) -> Markup {
    page_shell(
        "Published pages",
        html! {
            h1 { "Published pages" }
            @if pages.is_empty() {
                p { "Nothing has been published yet." }
            } @else {
                ul class="page-list" {
                    @for page in pages {
                        li {
                            a href=(urls.page_url(page.id)) { (page.title) }
                            @if page.file_type == FileType::Canvas {
                                span class="page-meta" { "canvas" }
                            }
                            @if let Some(published_at) = page.published_at {
                                span class="page-meta" { (published_at.format("%Y-%m-%d").to_string()) }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// A rendered note; `body_html` is trusted output of the note renderer
pub fn note_page(page: &PageRecord, body_html: &str) -> Markup {
    page_shell(
        &page.title,
        html! {
            article { (PreEscaped(body_html)) }
        },
    )
}

/// A canvas page. The rendered canvas travels as JSON and is laid out in
/// the browser.
pub fn canvas_page(page: &PageRecord, canvas: &RenderedCanvas) -> Result<Markup, serde_json::Error> {
    let data = script_safe_json(&serde_json::to_string(canvas)?);
    Ok(page_shell(
        &page.title,
        html! {
            h1 { (page.title) }
            div id="canvas" {}
            script id="canvas-data" type="application/json" { (PreEscaped(data)) }
            script { (PreEscaped(CANVAS_SCRIPT)) }
        },
    ))
}

/// Keep JSON from closing the surrounding `<script>` element
fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
