//! Tests for line and block aggregation.

use weft_core::layout::{MergeOptions, Span, group_blocks, group_lines};

fn span(text: &str, x: f64, y: f64) -> Span {
    Span::new(text, "F1", 12.0, x, y, 30.0)
}

#[test]
fn spans_within_tolerance_share_a_line() {
    let options = MergeOptions::default();
    let spans = vec![
        span("left", 72.0, 700.0),
        span("right", 200.0, 700.4),
        span("below", 72.0, 685.0),
    ];

    let lines = group_lines(spans, &options);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].spans().len(), 2);
    assert_eq!(lines[0].baseline(), 700.0);
    assert_eq!(lines[1].spans().len(), 1);
}

#[test]
fn tolerance_does_not_accumulate() {
    // Each span drifts 0.9 below the previous; the third is 1.8 from the
    // line's reference baseline and must start a new line.
    let options = MergeOptions::default();
    let spans = vec![
        span("a", 72.0, 700.0),
        span("b", 110.0, 699.1),
        span("c", 150.0, 698.2),
    ];

    let lines = group_lines(spans, &options);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].spans().len(), 2);
    assert_eq!(lines[1].baseline(), 698.2);
}

#[test]
fn close_lines_form_a_block() {
    let options = MergeOptions::default();
    // Baseline advance of 15 units at 12pt is within 1.8 em.
    let spans = vec![
        span("first", 72.0, 700.0),
        span("second", 72.0, 685.0),
        span("third", 72.0, 670.0),
    ];

    let blocks = group_blocks(group_lines(spans, &options));

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].lines().len(), 3);
}

#[test]
fn wide_gap_starts_a_new_block() {
    let options = MergeOptions::default();
    let spans = vec![
        span("para one", 72.0, 700.0),
        span("still one", 72.0, 685.0),
        // 85 units down: far beyond 1.8 * 12.
        span("para two", 72.0, 600.0),
    ];

    let blocks = group_blocks(group_lines(spans, &options));

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].lines().len(), 2);
    assert_eq!(blocks[1].lines().len(), 1);
    assert_eq!(blocks[1].first_baseline(), 600.0);
}

#[test]
fn upward_jump_starts_a_new_block() {
    // A line that sits higher than its predecessor signals a new column.
    let options = MergeOptions::default();
    let spans = vec![span("bottom", 72.0, 100.0), span("top", 300.0, 110.0)];

    let blocks = group_blocks(group_lines(spans, &options));

    assert_eq!(blocks.len(), 2);
}

#[test]
fn sharp_indent_shift_starts_a_new_block() {
    let options = MergeOptions::default();
    let spans = vec![
        span("margin", 72.0, 700.0),
        // Vertical gap is fine, but X jumps 328 units: over 4 em at 12pt.
        span("column", 400.0, 685.0),
    ];

    let blocks = group_blocks(group_lines(spans, &options));

    assert_eq!(blocks.len(), 2);
}

#[test]
fn small_indent_stays_in_the_block() {
    let options = MergeOptions::default();
    let spans = vec![
        span("indented first line", 90.0, 700.0),
        span("flush continuation", 72.0, 685.0),
    ];

    let blocks = group_blocks(group_lines(spans, &options));

    assert_eq!(blocks.len(), 1);
}

#[test]
fn regrouping_flattened_output_is_identical() {
    let options = MergeOptions::default();
    let spans = vec![
        span("one", 72.0, 700.0),
        span("two", 200.0, 700.0),
        span("three", 72.0, 685.0),
        span("four", 72.0, 600.0),
        span("five", 400.0, 585.0),
    ];

    let blocks = group_blocks(group_lines(spans, &options));

    let flattened: Vec<Span> = blocks
        .iter()
        .flat_map(|b| b.lines())
        .flat_map(|l| l.spans())
        .cloned()
        .collect();
    let regrouped = group_blocks(group_lines(flattened, &options));

    assert_eq!(regrouped, blocks);
}

#[test]
fn empty_input_produces_empty_output() {
    let options = MergeOptions::default();
    assert!(group_lines(Vec::new(), &options).is_empty());
    assert!(group_blocks(Vec::new()).is_empty());
}
