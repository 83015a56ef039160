//! Rendering benchmarks
//!
//! Run with: `cargo bench -p garden-core`
//!
//! - Inline scanning on a link-heavy note
//! - Full note pipeline (inline pass + markdown conversion)
//! - Canvas flattening with file-card previews

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use garden_core::models::{PageId, PageRecord};
use garden_core::render::{render_canvas_source, render_note, syntax::tokenize};
use garden_core::{InMemoryContentStore, InMemoryPageIndex, RenderContext, RenderOptions, SiteUrls};
use serde_json::json;
use tokio::runtime::Runtime;

const PAGE_COUNT: u64 = 200;

/// Index with `PAGE_COUNT` published notes and matching content
fn setup_vault() -> (InMemoryPageIndex, InMemoryContentStore) {
    let now = Utc::now();
    let mut records = Vec::new();
    let mut content = InMemoryContentStore::new();

    for i in 1..=PAGE_COUNT {
        let path = format!("notes/Note {}.md", i);
        let mut record = PageRecord::new(PageId(i), format!("Note {}", i), &path, now);
        record.publish(now);
        records.push(record);
        content = content.with_file(
            path,
            format!("# Note {}\n\nBody of note {} with ={{yellow}}a highlight=.", i, i),
        );
    }

    (InMemoryPageIndex::from_records(records), content)
}

/// Markdown with a mix of links, embeds and highlights
fn generate_note(paragraphs: usize) -> String {
    let mut md = String::new();
    for i in 0..paragraphs {
        let target = (i as u64 % PAGE_COUNT) + 1;
        md.push_str(&format!(
            "Paragraph {} links [[Note {}]] and [[Missing {}|an alias]], with ={{green}}marked text=.\n\n",
            i, target, i
        ));
        if i % 10 == 0 {
            md.push_str(&format!("![[Note {}]]\n\n", target));
        }
    }
    md
}

fn generate_canvas(nodes: usize) -> String {
    let nodes: Vec<_> = (0..nodes)
        .map(|i| {
            if i % 2 == 0 {
                json!({"id": format!("n{}", i), "type": "text", "text": format!("Card [[Note {}]]", i + 1), "x": i * 10, "y": 0})
            } else {
                json!({"id": format!("n{}", i), "type": "file", "file": format!("notes/Note {}.md", i), "x": i * 10, "y": 200})
            }
        })
        .collect();
    json!({"name": "Bench", "nodes": nodes, "edges": []}).to_string()
}

fn bench_tokenize(c: &mut Criterion) {
    let note = generate_note(500);
    c.bench_function("tokenize_500_paragraphs", |b| {
        b.iter(|| tokenize(black_box(&note)).len())
    });
}

fn bench_note_pipeline(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let (pages, content) = setup_vault();
    let urls = SiteUrls::default();
    let options = RenderOptions::default();
    let note = generate_note(100);

    let mut group = c.benchmark_group("render_note");
    group.sample_size(20);
    group.bench_function("100_paragraphs", |b| {
        b.iter(|| {
            rt.block_on(async {
                let ctx = RenderContext::new(&pages, &content, &urls, &options);
                render_note(ctx, PageId(0), black_box(&note)).await
            })
        })
    });
    group.finish();
}

fn bench_canvas(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let (pages, content) = setup_vault();
    let urls = SiteUrls::default();
    let options = RenderOptions::default();
    let canvas = generate_canvas(100);

    c.bench_function("render_canvas_100_nodes", |b| {
        b.iter(|| {
            rt.block_on(async {
                let ctx = RenderContext::new(&pages, &content, &urls, &options);
                render_canvas_source(ctx, black_box(&canvas), PageId(0)).await
            })
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_note_pipeline, bench_canvas);
criterion_main!(benches);
