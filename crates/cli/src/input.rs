//! Run-dump input format.
//!
//! The CLI tools consume the values the core's boundary expects from an
//! upstream content-stream interpreter, serialized as JSON: one width
//! table per font and one ordered run list per page. This is not a PDF
//! parser; resolving documents into this shape is the upstream's job.

use std::collections::BTreeMap;
use std::error::Error;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use weft_core::font::{FontRegistry, WidthTable};
use weft_core::layout::TextRun;

/// A resolved font's width data.
#[derive(Debug, Clone, Deserialize)]
pub struct FontRecord {
    pub first_char: u32,
    pub last_char: u32,
    #[serde(default)]
    pub widths: Vec<f64>,
    #[serde(default)]
    pub default_width: Option<f64>,
}

/// One positioned text run.
#[derive(Debug, Clone, Deserialize)]
pub struct RunRecord {
    pub text: String,
    pub font: String,
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    #[serde(default)]
    pub char_spacing: f64,
    #[serde(default)]
    pub word_spacing: f64,
}

impl RunRecord {
    pub fn to_run(&self) -> TextRun {
        TextRun::with_spacing(
            &self.text,
            &self.font,
            self.size,
            self.x,
            self.y,
            self.w,
            self.char_spacing,
            self.word_spacing,
        )
    }
}

/// One page's ordered runs.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRecord {
    #[serde(default)]
    pub runs: Vec<RunRecord>,
}

/// A whole run dump: fonts plus pages.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub fonts: BTreeMap<String, FontRecord>,
    #[serde(default)]
    pub pages: Vec<PageRecord>,
}

impl Document {
    /// Reads and parses a dump from a file, or from stdin when the path
    /// is `-`.
    pub fn read(path: &Path) -> Result<Self, Box<dyn Error>> {
        let data = if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(path)?
        };
        Ok(serde_json::from_str(&data)?)
    }

    /// Builds the shared font registry from the dump's width tables.
    pub fn registry(&self) -> FontRegistry {
        let mut fonts = FontRegistry::new();
        for (name, record) in &self.fonts {
            fonts.insert(
                name.as_str(),
                Arc::new(WidthTable::new(
                    record.first_char,
                    record.last_char,
                    record.widths.clone(),
                    record.default_width,
                )),
            );
        }
        fonts
    }

    /// Converts the dump's pages into the core's run sequences.
    pub fn page_runs(&self) -> Vec<Vec<TextRun>> {
        self.pages
            .iter()
            .map(|p| p.runs.iter().map(RunRecord::to_run).collect())
            .collect()
    }
}
