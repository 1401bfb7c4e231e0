//! High-level extraction: whole pages and whole documents.

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::debug;

use crate::converter::render_text;
use crate::error::Result;
use crate::font::FontRegistry;
use crate::layout::{
    Block, MergeOptions, Span, TextRun, build_spans, group_blocks, group_lines,
};

/// Options for high-level extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Merge configuration applied to every page.
    pub merge: MergeOptions,
    /// Worker threads for multi-page extraction. `None` uses the global
    /// rayon pool; `Some(1)` forces sequential processing.
    pub threads: Option<usize>,
}

/// One page's reconstructed layout.
///
/// Spans are kept alongside the block hierarchy so callers can feed them
/// to the row/column organizer without rebuilding.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub spans: Vec<Span>,
    pub blocks: Vec<Block>,
}

/// Runs the span/line/block pipeline over one page of runs.
pub fn process_page(
    runs: &[TextRun],
    fonts: &FontRegistry,
    options: &MergeOptions,
) -> Result<PageLayout> {
    let spans = build_spans(runs, fonts, options)?;
    let lines = group_lines(spans.clone(), options);
    let blocks = group_blocks(lines);
    Ok(PageLayout { spans, blocks })
}

/// Renders one page of runs to plain text.
pub fn extract_page_text(
    runs: &[TextRun],
    fonts: &FontRegistry,
    options: &MergeOptions,
) -> Result<String> {
    let page = process_page(runs, fonts, options)?;
    Ok(render_text(&page.blocks))
}

/// Processes every page of a document, fanning pages out across worker
/// threads.
///
/// Pages are independent and the registry is shared read-only, so page
/// work needs no locking; results come back in page order regardless of
/// completion order.
pub fn extract_pages(
    pages: &[Vec<TextRun>],
    fonts: &FontRegistry,
    options: &ExtractOptions,
) -> Result<Vec<PageLayout>> {
    let merge = options.merge;
    let parallel = || {
        pages
            .par_iter()
            .map(|runs| process_page(runs, fonts, &merge))
            .collect::<Result<Vec<_>>>()
    };

    match options.threads {
        Some(1) => pages
            .iter()
            .map(|runs| process_page(runs, fonts, &merge))
            .collect(),
        Some(threads) => match ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(parallel),
            Err(err) => {
                debug!(%err, "falling back to the global thread pool");
                parallel()
            }
        },
        None => parallel(),
    }
}

/// Renders a whole document to plain text, one form feed per page.
pub fn extract_text(
    pages: &[Vec<TextRun>],
    fonts: &FontRegistry,
    options: &ExtractOptions,
) -> Result<String> {
    let layouts = extract_pages(pages, fonts, options)?;

    let mut out = String::new();
    for layout in &layouts {
        out.push_str(&render_text(&layout.blocks));
        out.push('\x0c');
    }
    Ok(out)
}
