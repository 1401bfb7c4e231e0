//! Shared input handling for the weft command line tools.

pub mod input;
