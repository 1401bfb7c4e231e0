//! Output conversion: plain-text rendering of reconstructed layout.

pub mod text;

pub use text::{SEPARATOR_GAP_RATIO, TextChunks, TextConverter, render_text, text_chunks};
