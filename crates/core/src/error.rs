//! Error types for the weft text reconstruction library.

use smol_str::SmolStr;
use thiserror::Error;

/// Primary error type for text reconstruction operations.
///
/// The merging and aggregation core is total over well-formed input:
/// degenerate metrics (missing widths, zero font sizes, empty runs)
/// degrade to documented fallbacks instead of failing, so one malformed
/// font cannot abort extraction of the rest of a page. The one structural
/// failure surfaced to the caller is a run referencing a font identifier
/// with no registered metrics, since fabricating widths would silently
/// corrupt merge decisions.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("no metrics registered for font: {font}")]
    UnknownFont { font: SmolStr },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;
