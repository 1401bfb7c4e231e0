//! Tests for the plain-text renderer.

use std::sync::Arc;

use weft_core::converter::{TextConverter, render_text, text_chunks};
use weft_core::font::{FontRegistry, WidthTable};
use weft_core::high_level::process_page;
use weft_core::layout::{MergeOptions, TextRun};

fn registry() -> FontRegistry {
    let mut fonts = FontRegistry::new();
    fonts.insert("F1", Arc::new(WidthTable::new(32, 32, vec![500.0], None)));
    fonts.insert("F2", Arc::new(WidthTable::new(32, 32, vec![500.0], None)));
    fonts
}

/// One page: a block of two lines (the first split across two distant
/// spans), then a second block much further down.
fn sample_runs() -> Vec<TextRun> {
    vec![
        TextRun::new("Left", "F1", 12.0, 72.0, 700.0, 20.0),
        TextRun::new("Right", "F1", 12.0, 200.0, 700.0, 25.0),
        TextRun::new("Next line", "F1", 12.0, 72.0, 685.0, 50.0),
        TextRun::new("New block", "F1", 12.0, 72.0, 600.0, 50.0),
    ]
}

#[test]
fn renders_lines_blocks_and_separators() {
    let fonts = registry();
    let page = process_page(&sample_runs(), &fonts, &MergeOptions::default()).unwrap();

    let text = render_text(&page.blocks);

    assert_eq!(text, "Left Right\nNext line\n\nNew block\n");
}

#[test]
fn narrow_gap_between_unmerged_spans_gets_no_space() {
    // A font change forces two spans, but a 1-unit gap at 12pt is too
    // narrow to read as a word boundary.
    let fonts = registry();
    let runs = vec![
        TextRun::new("foo", "F1", 12.0, 72.0, 700.0, 18.0),
        TextRun::new("bar", "F2", 12.0, 91.0, 700.0, 18.0),
    ];
    let page = process_page(&runs, &fonts, &MergeOptions::default()).unwrap();

    assert_eq!(page.spans.len(), 2);
    assert_eq!(render_text(&page.blocks), "foobar\n");
}

#[test]
fn chunk_stream_is_restartable() {
    let fonts = registry();
    let page = process_page(&sample_runs(), &fonts, &MergeOptions::default()).unwrap();

    let first: String = text_chunks(&page.blocks).collect();
    let second: String = text_chunks(&page.blocks).collect();
    assert_eq!(first, second);
    assert_eq!(first, render_text(&page.blocks));
}

#[test]
fn empty_page_renders_nothing() {
    let fonts = registry();
    let page = process_page(&[], &fonts, &MergeOptions::default()).unwrap();

    assert!(page.spans.is_empty());
    assert!(page.blocks.is_empty());
    assert_eq!(render_text(&page.blocks), "");
    assert_eq!(text_chunks(&page.blocks).count(), 0);
}

#[test]
fn converter_terminates_pages_with_form_feed() {
    let fonts = registry();
    let page = process_page(&sample_runs(), &fonts, &MergeOptions::default()).unwrap();

    let mut out: Vec<u8> = Vec::new();
    let mut converter = TextConverter::new(&mut out, false);
    converter.receive_page(&page.blocks).unwrap();
    converter.receive_page(&[]).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "Left Right\nNext line\n\nNew block\n\x0c\x0c");
}

#[test]
fn converter_can_number_pages() {
    let fonts = registry();
    let page = process_page(&[], &fonts, &MergeOptions::default()).unwrap();

    let mut out: Vec<u8> = Vec::new();
    let mut converter = TextConverter::new(&mut out, true);
    converter.receive_page(&page.blocks).unwrap();
    converter.receive_page(&page.blocks).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Page 1\n\x0cPage 2\n\x0c");
}
