//! Font metrics: resolved glyph-width data and the registry that shares
//! it across pages.

pub mod metrics;
pub mod registry;

pub use metrics::{DEFAULT_GLYPH_WIDTH, FontMetrics, SPACE_CODE, WidthTable};
pub use registry::{FontHandle, FontRegistry};
