//! Span-to-line and line-to-block aggregation.
//!
//! Both passes are sequential over reading order with no backtracking:
//! once a span is closed into a line, or a line into a block, it is never
//! revisited.

use tracing::debug;

use super::elements::{Block, Line, Span};
use super::params::MergeOptions;

/// Baseline-to-baseline advance, relative to the block's dominant span
/// size, beyond which the next line starts a new block. Tuned empirically
/// against sample documents; not derived from any font metric.
pub const LINE_GAP_FACTOR: f64 = 1.8;

/// Start-of-line X shift, relative to the block's dominant span size,
/// beyond which the next line starts a new block. Catches column jumps
/// while tolerating first-line paragraph indents. Tuned empirically.
pub const INDENT_SHIFT_FACTOR: f64 = 4.0;

/// Groups spans (already in reading order) into lines by baseline
/// proximity.
///
/// A span joins the current line iff its baseline is within
/// `options.baseline_tolerance` of the line's reference baseline, the
/// first span's; tolerance does not accumulate across a drifting line.
pub fn group_lines(spans: Vec<Span>, options: &MergeOptions) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();

    for span in spans {
        match lines.last_mut() {
            Some(line) if (line.baseline() - span.y()).abs() <= options.baseline_tolerance => {
                line.push(span);
            }
            _ => lines.push(Line::new(span)),
        }
    }

    lines
}

/// Groups consecutive lines into blocks.
///
/// A line continues the current block unless the baseline advance is
/// non-positive (the line sits higher on the page than its predecessor,
/// i.e. a new column), the advance exceeds [`LINE_GAP_FACTOR`] times the
/// block's dominant span size, or the line's start X shifts by more than
/// [`INDENT_SHIFT_FACTOR`] times that size.
pub fn group_blocks(lines: Vec<Line>) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();

    for line in lines {
        match blocks.last_mut() {
            Some(block) if continues_block(block, &line) => block.push(line),
            _ => blocks.push(Block::new(line)),
        }
    }

    debug!(blocks = blocks.len(), "grouped lines into blocks");
    blocks
}

fn continues_block(block: &Block, line: &Line) -> bool {
    let dominant = block.dominant_size();
    let gap = block.last_baseline() - line.baseline();
    let shift = (line.x0() - block.x0()).abs();

    gap > 0.0 && gap <= dominant * LINE_GAP_FACTOR && shift <= dominant * INDENT_SHIFT_FACTOR
}
