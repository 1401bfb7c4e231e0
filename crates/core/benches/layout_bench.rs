//! Criterion benchmarks for the span/line/block pipeline.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};

use weft_core::font::{FontRegistry, WidthTable};
use weft_core::high_level::process_page;
use weft_core::layout::{MergeOptions, TextRun, group_rows};

/// Builds a page of `lines` lines, each fragmented into `runs_per_line`
/// runs: every other boundary is a sub-space kerning gap, the rest are
/// word gaps.
fn synthetic_page(lines: usize, runs_per_line: usize) -> Vec<TextRun> {
    let mut runs = Vec::with_capacity(lines * runs_per_line);
    for line in 0..lines {
        let y = 760.0 - 14.0 * line as f64;
        let mut x = 72.0;
        for i in 0..runs_per_line {
            let w = 24.0;
            runs.push(TextRun::new("lorem", "F1", 12.0, x, y, w));
            let gap = if i % 2 == 0 { 0.4 } else { 18.0 };
            x += w + gap;
        }
    }
    runs
}

fn registry() -> FontRegistry {
    let mut fonts = FontRegistry::new();
    fonts.insert("F1", Arc::new(WidthTable::new(32, 126, vec![500.0; 95], Some(500.0))));
    fonts
}

fn bench_process_page(c: &mut Criterion) {
    let fonts = registry();
    let options = MergeOptions::default();
    let runs = synthetic_page(200, 10);

    c.bench_function("process_page_2k_runs", |b| {
        b.iter(|| process_page(black_box(&runs), &fonts, &options).unwrap());
    });
}

fn bench_group_rows(c: &mut Criterion) {
    let fonts = registry();
    let options = MergeOptions::default();
    let runs = synthetic_page(200, 10);
    let page = process_page(&runs, &fonts, &options).unwrap();

    c.bench_function("group_rows_1k_spans", |b| {
        b.iter(|| group_rows(black_box(page.spans.clone()), 5.0));
    });
}

criterion_group!(benches, bench_process_page, bench_group_rows);
criterion_main!(benches);
