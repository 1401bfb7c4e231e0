//! Positioned text runs as emitted by the content-stream interpreter.

use smol_str::SmolStr;

/// Atomic glyph run: decoded text drawn at an absolute baseline position.
///
/// Produced by the (external) content-stream interpreter and consumed by
/// the span builder. Never mutated by the pipeline; aggregation builds new
/// owning containers instead.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Decoded Unicode content.
    pub text: String,
    /// Font identifier, resolvable through a [`FontRegistry`].
    ///
    /// [`FontRegistry`]: crate::font::FontRegistry
    pub font: SmolStr,
    /// Font size in points.
    pub size: f64,
    /// Baseline X in page coordinates.
    pub x: f64,
    /// Baseline Y in page coordinates; grows upward.
    pub y: f64,
    /// Measured width of the drawn run.
    pub w: f64,
    /// Character spacing (Tc) in effect when the run was drawn.
    pub char_spacing: f64,
    /// Word spacing (Tw) in effect when the run was drawn.
    pub word_spacing: f64,
}

impl TextRun {
    /// Creates a run with no explicit spacing parameters.
    pub fn new(text: &str, font: &str, size: f64, x: f64, y: f64, w: f64) -> Self {
        Self::with_spacing(text, font, size, x, y, w, 0.0, 0.0)
    }

    /// Creates a run carrying the character and word spacing that were
    /// active when it was drawn.
    #[allow(clippy::too_many_arguments)]
    pub fn with_spacing(
        text: &str,
        font: &str,
        size: f64,
        x: f64,
        y: f64,
        w: f64,
        char_spacing: f64,
        word_spacing: f64,
    ) -> Self {
        Self {
            text: text.to_string(),
            font: SmolStr::new(font),
            size,
            x,
            y,
            w,
            char_spacing,
            word_spacing,
        }
    }

    /// Right edge of the run on its baseline.
    pub fn x1(&self) -> f64 {
        self.x + self.w
    }
}
