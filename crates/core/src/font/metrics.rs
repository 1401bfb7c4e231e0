//! Glyph width lookup over resolved width tables.

/// Character code of the space glyph in the common simple-font encodings.
pub const SPACE_CODE: u32 = 32;

/// Fallback proportional width, in glyph-space units, for fonts that
/// declare neither a table entry nor a default width. Real documents
/// frequently ship partially specified fonts, so lookups degrade to this
/// rather than erroring.
pub const DEFAULT_GLYPH_WIDTH: f64 = 500.0;

/// Narrow capability interface over a font's resolved width data.
///
/// Implementations must be pure: the same character code always yields
/// the same width, with no side effects. Widths are in glyph-space design
/// units (1/1000 em). How the data was pulled out of the document object
/// graph is the external font resolver's concern.
pub trait FontMetrics {
    /// Returns the advance width of a glyph by character code.
    ///
    /// Never fails; absent data degrades to the font's declared default
    /// width, then to [`DEFAULT_GLYPH_WIDTH`].
    fn glyph_width(&self, code: u32) -> f64;

    /// Returns the width used for codes without table entries.
    fn default_width(&self) -> f64;
}

/// Width table of a simple font: consecutive glyph widths for the
/// character codes in `[first_char, last_char]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthTable {
    first_char: u32,
    last_char: u32,
    widths: Vec<f64>,
    default_width: Option<f64>,
}

impl WidthTable {
    /// Creates a width table over resolved font data.
    ///
    /// `widths[i]` is the width of character code `first_char + i`; codes
    /// outside `[first_char, last_char]` (or beyond the table's actual
    /// length) use `default_width` when declared.
    pub fn new(
        first_char: u32,
        last_char: u32,
        widths: Vec<f64>,
        default_width: Option<f64>,
    ) -> Self {
        Self {
            first_char,
            last_char,
            widths,
            default_width,
        }
    }

    /// A table with no width data at all; every lookup degrades to
    /// [`DEFAULT_GLYPH_WIDTH`].
    pub fn empty() -> Self {
        Self::new(0, 0, Vec::new(), None)
    }

    pub const fn first_char(&self) -> u32 {
        self.first_char
    }

    pub const fn last_char(&self) -> u32 {
        self.last_char
    }

    pub fn widths(&self) -> &[f64] {
        &self.widths
    }
}

impl FontMetrics for WidthTable {
    fn glyph_width(&self, code: u32) -> f64 {
        if (self.first_char..=self.last_char).contains(&code) {
            if let Some(&width) = self.widths.get((code - self.first_char) as usize) {
                return width;
            }
        }
        self.default_width()
    }

    fn default_width(&self) -> f64 {
        self.default_width.unwrap_or(DEFAULT_GLYPH_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_inside_range() {
        let table = WidthTable::new(32, 34, vec![250.0, 300.0, 350.0], Some(400.0));
        assert_eq!(table.glyph_width(32), 250.0);
        assert_eq!(table.glyph_width(34), 350.0);
    }

    #[test]
    fn out_of_range_uses_declared_default() {
        let table = WidthTable::new(32, 34, vec![250.0, 300.0, 350.0], Some(400.0));
        assert_eq!(table.glyph_width(31), 400.0);
        assert_eq!(table.glyph_width(200), 400.0);
    }

    #[test]
    fn missing_default_uses_hard_fallback() {
        let table = WidthTable::new(32, 34, vec![250.0], None);
        // In range but past the end of the table.
        assert_eq!(table.glyph_width(34), DEFAULT_GLYPH_WIDTH);
        assert_eq!(table.glyph_width(999), DEFAULT_GLYPH_WIDTH);
        assert_eq!(WidthTable::empty().glyph_width(SPACE_CODE), DEFAULT_GLYPH_WIDTH);
    }
}
