//! Merged spans of uniformly-styled text.

use smol_str::SmolStr;

use super::run::TextRun;

/// A contiguous run of text with consistent font and size, folded from
/// one or more [`TextRun`]s. Immutable once the span builder closes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    text: String,
    font: SmolStr,
    size: f64,
    x: f64,
    y: f64,
    w: f64,
}

impl Span {
    /// Creates a span directly, for callers that already hold merged text.
    ///
    /// The pipeline itself only produces spans with non-empty text.
    pub fn new(text: &str, font: &str, size: f64, x: f64, y: f64, w: f64) -> Self {
        debug_assert!(!text.is_empty(), "span text should be non-empty");
        Self {
            text: text.to_string(),
            font: SmolStr::new(font),
            size,
            x,
            y,
            w,
        }
    }

    pub(crate) fn from_run(run: &TextRun) -> Self {
        Self {
            text: run.text.clone(),
            font: run.font.clone(),
            size: run.size,
            x: run.x,
            y: run.y,
            w: run.w,
        }
    }

    /// Absorbs the next run: text concatenates with no separator (the
    /// merge decision already certified the gap as sub-word-boundary) and
    /// the width extends to the run's right edge.
    pub(crate) fn absorb(&mut self, run: &TextRun) {
        self.text.push_str(&run.text);
        self.w = run.x + run.w - self.x;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub const fn size(&self) -> f64 {
        self.size
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    pub const fn w(&self) -> f64 {
        self.w
    }

    /// Right edge of the span on its baseline.
    pub fn x1(&self) -> f64 {
        self.x + self.w
    }
}
