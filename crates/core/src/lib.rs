//! weft - reconstruction of structured text from positioned glyph runs.
//!
//! The input is the already-resolved output of a content-stream
//! interpreter: an ordered sequence of positioned text runs per page, plus
//! a width table per font. weft folds adjacent runs into spans by
//! comparing the observed horizontal gap against the advance a single
//! inter-word space would occupy, groups spans into lines and blocks (or
//! into quantized rows and columns), and renders the result as a lazy
//! plain-text stream.
//!
//! Container parsing, operator lexing, stream filters and byte-to-Unicode
//! decoding are the caller's problem; the core only ever sees resolved
//! in-memory values.

pub mod api;
pub mod converter;
pub mod error;
pub mod font;
pub mod layout;
pub mod utils;

pub use api::high_level;

pub use error::{ExtractError, Result};
pub use font::{FontMetrics, FontRegistry, WidthTable};
pub use layout::{Block, Column, Line, MergeOptions, Row, Span, TextRun};
