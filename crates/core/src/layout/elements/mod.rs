//! Layout element types.

pub mod line;
pub mod run;
pub mod span;

pub use line::{Block, Line};
pub use run::TextRun;
pub use span::Span;
