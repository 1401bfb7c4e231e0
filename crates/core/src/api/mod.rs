//! High-level extraction API.

pub mod high_level;

pub use high_level::{
    ExtractOptions, PageLayout, extract_page_text, extract_pages, extract_text, process_page,
};
