//! Benchmarks for the Markdown rendering pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use galley::{render_document, Document, RenderEnvironment, StyleSheet};

const SAMPLE_MD: &str = include_str!("../tests/fixtures/sample.md");

// ============================================================================
// Parsing
// ============================================================================

fn bench_parse_markdown(c: &mut Criterion) {
    c.bench_function("parse_markdown", |b| {
        b.iter(|| Document::from_markdown(SAMPLE_MD));
    });
}

// ============================================================================
// Rendering
// ============================================================================

fn bench_render_document(c: &mut Criterion) {
    let doc = Document::from_markdown(SAMPLE_MD);
    let sheet = StyleSheet::default();
    let env = RenderEnvironment::new();

    c.bench_function("render_document", |b| {
        b.iter(|| render_document(&doc, &sheet, &env).unwrap());
    });
}

fn bench_render_many_paragraphs(c: &mut Criterion) {
    let source = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.\n\n".repeat(200);
    let doc = Document::from_markdown(&source);
    let sheet = StyleSheet::default();
    let env = RenderEnvironment::new();

    c.bench_function("render_many_paragraphs", |b| {
        b.iter(|| render_document(&doc, &sheet, &env).unwrap());
    });
}

fn bench_render_deep_lists(c: &mut Criterion) {
    let mut source = String::new();
    for depth in 0..12 {
        source.push_str(&"  ".repeat(depth));
        source.push_str("- nested item\n");
    }
    let doc = Document::from_markdown(&source);
    let sheet = StyleSheet::default();
    let env = RenderEnvironment::new();

    c.bench_function("render_deep_lists", |b| {
        b.iter(|| render_document(&doc, &sheet, &env).unwrap());
    });
}

// ============================================================================
// End to end
// ============================================================================

fn bench_parse_and_render(c: &mut Criterion) {
    let sheet = StyleSheet::default();
    let env = RenderEnvironment::new();

    c.bench_function("parse_and_render", |b| {
        b.iter(|| {
            let doc = Document::from_markdown(SAMPLE_MD);
            render_document(&doc, &sheet, &env).unwrap()
        });
    });
}

criterion_group!(
    benches,
    // Parsing
    bench_parse_markdown,
    // Rendering
    bench_render_document,
    bench_render_many_paragraphs,
    bench_render_deep_lists,
    // End to end
    bench_parse_and_render,
);
criterion_main!(benches);
