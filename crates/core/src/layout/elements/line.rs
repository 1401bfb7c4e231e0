//! Lines and blocks: the hierarchical grouping containers.

use crate::utils::{SIZE_EPSILON, approx_eq};

use super::span::Span;

/// Spans sharing a baseline within tolerance, ordered by X.
///
/// The reference baseline is the first span's; later spans may deviate by
/// up to the configured tolerance without moving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    baseline: f64,
    spans: Vec<Span>,
}

impl Line {
    pub(crate) fn new(first: Span) -> Self {
        Self {
            baseline: first.y(),
            spans: vec![first],
        }
    }

    pub(crate) fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    pub const fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn iter(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter()
    }

    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    /// Left edge: spans are emitted left to right, so the first span's X.
    pub fn x0(&self) -> f64 {
        self.spans.first().map(Span::x).unwrap_or(0.0)
    }

    /// Right edge of the last span.
    pub fn x1(&self) -> f64 {
        self.spans.last().map(Span::x1).unwrap_or(0.0)
    }
}

/// Consecutive lines judged contiguous, forming a paragraph-like unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    lines: Vec<Line>,
}

impl Block {
    pub(crate) fn new(first: Line) -> Self {
        Self { lines: vec![first] }
    }

    pub(crate) fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// Baseline of the first (topmost) line.
    pub fn first_baseline(&self) -> f64 {
        self.lines.first().map(Line::baseline).unwrap_or(0.0)
    }

    /// Baseline of the last line absorbed so far.
    pub fn last_baseline(&self) -> f64 {
        self.lines.last().map(Line::baseline).unwrap_or(0.0)
    }

    /// Start X of the block's first line, the anchor for indent-shift
    /// comparisons.
    pub fn x0(&self) -> f64 {
        self.lines.first().map(Line::x0).unwrap_or(0.0)
    }

    /// Modal span size across the block, used to derive the vertical-gap
    /// tolerance for paragraph continuation. Blocks carry few distinct
    /// sizes, so a linear count is fine.
    pub fn dominant_size(&self) -> f64 {
        let mut counts: Vec<(f64, usize)> = Vec::new();
        for span in self.lines.iter().flat_map(Line::spans) {
            match counts
                .iter_mut()
                .find(|(size, _)| approx_eq(*size, span.size(), SIZE_EPSILON))
            {
                Some((_, n)) => *n += 1,
                None => counts.push((span.size(), 1)),
            }
        }
        counts
            .into_iter()
            .max_by_key(|&(_, n)| n)
            .map(|(size, _)| size)
            .unwrap_or(0.0)
    }
}
