//! Benchmarks comparing mdlite parsing vs pulldown-cmark on the same input
//!
//! Run with: cargo bench -p mdlite-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mdlite_core::{parse_inline, Parser, Renderer};
use pulldown_cmark::{Options, Parser as MdParser};

/// Uses only constructs both parsers understand
const SAMPLE: &str = r#"# Introduction

This is a paragraph with *emphasis*, **strong text**, and ~~struck~~ words.
It demonstrates the basic capabilities of the format.

## Pictures

![Architecture diagram](https://example.com/images/architecture.png)
![](https://example.com/images/plain.png)

## Table

| Name    | Speed   | Memory |
| ------- | ------- | ------ |
| Fast    | 100ms   | 10MB   |
| Medium  | 500ms   | 50MB   |
| Slow    | 1000ms  | 100MB  |

### Notes

Unmatched **markers stay *in the text.
Mixed **bold***italic*~~strike~~ without spaces.

End of document.
"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));

    group.bench_function("mdlite", |b| {
        let parser = Parser::new();
        b.iter(|| {
            let doc = parser.parse(black_box(SAMPLE));
            black_box(doc.blocks.len())
        })
    });

    group.bench_function("markdown_pulldown", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(SAMPLE), Options::all());
            let events: Vec<_> = parser.collect();
            black_box(events.len())
        })
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [1, 5, 10, 20].iter() {
        let content: String = SAMPLE.repeat(*size);
        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::new("mdlite", size), &content, |b, content| {
            let parser = Parser::new();
            b.iter(|| {
                let doc = parser.parse(black_box(content));
                black_box(doc.blocks.len())
            })
        });

        group.bench_with_input(
            BenchmarkId::new("markdown", size),
            &content,
            |b, content| {
                b.iter(|| {
                    let parser = MdParser::new_ext(black_box(content), Options::all());
                    let events: Vec<_> = parser.collect();
                    black_box(events.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_inline_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let inline = "This has *emphasis*, **strong**, a stray * and ** pair, and ~~strike~~.";

    group.bench_function("mdlite_inline", |b| {
        b.iter(|| {
            let inlines = parse_inline(black_box(inline));
            black_box(inlines.len())
        })
    });

    group.bench_function("markdown_inline", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(inline), Options::all());
            let events: Vec<_> = parser.collect();
            black_box(events.len())
        })
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let doc = Parser::new().parse(SAMPLE);
    let renderer = Renderer::default();

    c.bench_function("render_plain", |b| {
        b.iter(|| black_box(renderer.render(black_box(&doc))).len())
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_scaling,
    bench_inline_parsing,
    bench_render
);
criterion_main!(benches);
