//! Merge decision engine: do two adjacent runs form one continuous span?

use tracing::trace;

use crate::font::{DEFAULT_GLYPH_WIDTH, FontMetrics, SPACE_CODE};
use crate::utils::{GLYPH_SPACE_UNITS, SIZE_EPSILON, approx_eq};

use super::elements::TextRun;
use super::params::MergeOptions;

/// Computes the advance a single inter-word space would occupy at the
/// given size, including explicit character and word spacing.
///
/// Degenerate metrics (missing or non-positive space width, non-positive
/// font size, non-finite spacing) degrade step by step so the result is
/// always finite and non-negative.
pub fn expected_space_gap(
    font: &dyn FontMetrics,
    size: f64,
    char_spacing: f64,
    word_spacing: f64,
) -> f64 {
    let mut glyph = font.glyph_width(SPACE_CODE);
    if !glyph.is_finite() || glyph <= 0.0 {
        glyph = font.default_width();
    }
    if !glyph.is_finite() || glyph <= 0.0 {
        glyph = DEFAULT_GLYPH_WIDTH;
    }

    let size = if size.is_finite() && size > 0.0 { size } else { 0.0 };

    let gap = glyph / GLYPH_SPACE_UNITS * size + char_spacing + word_spacing;
    if gap.is_finite() { gap.max(0.0) } else { 0.0 }
}

/// Decides whether two adjacent runs represent one continuous span.
///
/// Assumes left-to-right, same-line adjacency: `prev` was emitted before
/// `next`, and emission order is never reconsidered here. The spacing
/// parameters are the ones active at the successor's draw time.
///
/// Runs merge when they share font and size, their baselines agree within
/// `options.baseline_tolerance`, and the observed gap does not exceed the
/// expected single-space advance scaled by `options.space_multiplier`.
/// The comparison is inclusive: real documents land exactly on the
/// threshold after rounding. Negative gaps (overlapping glyphs) merge.
pub fn can_be_merged(
    prev: &TextRun,
    next: &TextRun,
    font: &dyn FontMetrics,
    char_spacing: f64,
    word_spacing: f64,
    options: &MergeOptions,
) -> bool {
    if prev.font != next.font {
        return false;
    }
    if !approx_eq(prev.size, next.size, SIZE_EPSILON) {
        return false;
    }
    if (prev.y - next.y).abs() > options.baseline_tolerance {
        return false;
    }

    let expected = expected_space_gap(font, prev.size, char_spacing, word_spacing);
    let actual = next.x - (prev.x + prev.w);

    let merged = actual <= expected * options.space_multiplier;
    if !merged {
        trace!(actual, expected, "merge rejected: gap exceeds space threshold");
    }
    merged
}
