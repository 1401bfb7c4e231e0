//! Read-only registry of font metrics shared across pages.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::error::{ExtractError, Result};

use super::metrics::FontMetrics;

/// Shared handle to a font's metrics.
pub type FontHandle = Arc<dyn FontMetrics + Send + Sync>;

/// Maps font identifiers to resolved metrics.
///
/// Built once by the caller, from whatever object model the external font
/// resolver uses, then shared read-only across page-processing workers.
/// Nothing in the pipeline mutates a registry after construction.
#[derive(Default, Clone)]
pub struct FontRegistry {
    fonts: FxHashMap<SmolStr, FontHandle>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers metrics under a font identifier, replacing any previous
    /// entry for the same identifier.
    pub fn insert(&mut self, font: impl Into<SmolStr>, metrics: FontHandle) {
        self.fonts.insert(font.into(), metrics);
    }

    pub fn get(&self, font: &str) -> Option<&FontHandle> {
        self.fonts.get(font)
    }

    /// Resolves a font identifier, surfacing unknown identifiers as an
    /// error instead of fabricating metrics.
    pub fn resolve(&self, font: &str) -> Result<&FontHandle> {
        self.fonts.get(font).ok_or_else(|| ExtractError::UnknownFont {
            font: SmolStr::new(font),
        })
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRegistry")
            .field("fonts", &self.fonts.keys().collect::<Vec<_>>())
            .finish()
    }
}
