//! Row and column organization: quantized tabular views over spans.
//!
//! The alternative to line/block aggregation when the caller wants
//! table-shaped output: spans are bucketed by floor-quantized baseline Y
//! (rows) or start X (columns), trading hierarchical fidelity for
//! simplicity.

use indexmap::IndexMap;

use crate::utils::quantize_floor;

use super::elements::Span;

/// Default quantization granularity, in page units.
pub const DEFAULT_GRANULARITY: f64 = 5.0;

/// Spans bucketed by quantized baseline Y.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    key: i64,
    spans: Vec<Span>,
}

impl Row {
    /// Bucket index: `floor(y / granularity)`.
    pub const fn key(&self) -> i64 {
        self.key
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }
}

/// Spans bucketed by quantized start X.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    key: i64,
    spans: Vec<Span>,
}

impl Column {
    /// Bucket index: `floor(x / granularity)`.
    pub const fn key(&self) -> i64 {
        self.key
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }
}

/// Buckets spans by floor-quantized baseline Y.
///
/// Buckets appear in first-insertion order, which for runs emitted in
/// reading order is top-to-bottom; spans within a bucket keep emission
/// order. Ties at bucket boundaries resolve by floor quantization.
///
/// # Panics
/// Panics if `granularity` is not positive.
pub fn group_rows(spans: Vec<Span>, granularity: f64) -> Vec<Row> {
    assert!(granularity > 0.0, "granularity should be positive");

    let mut buckets: IndexMap<i64, Vec<Span>> = IndexMap::new();
    for span in spans {
        let key = quantize_floor(span.y(), granularity);
        buckets.entry(key).or_default().push(span);
    }

    buckets
        .into_iter()
        .map(|(key, spans)| Row { key, spans })
        .collect()
}

/// Buckets spans by floor-quantized start X.
///
/// Same ordering and tie rules as [`group_rows`].
///
/// # Panics
/// Panics if `granularity` is not positive.
pub fn group_columns(spans: Vec<Span>, granularity: f64) -> Vec<Column> {
    assert!(granularity > 0.0, "granularity should be positive");

    let mut buckets: IndexMap<i64, Vec<Span>> = IndexMap::new();
    for span in spans {
        let key = quantize_floor(span.x(), granularity);
        buckets.entry(key).or_default().push(span);
    }

    buckets
        .into_iter()
        .map(|(key, spans)| Column { key, spans })
        .collect()
}
