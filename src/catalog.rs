//! Emoji catalog: the static dataset every view is derived from.
//!
//! Records use the gemoji JSON layout (`emoji`, `description`, `category`,
//! `aliases`, `tags`, `unicode_version`, `ios_version`). A catalog ships
//! embedded in the crate; a file on disk can replace it.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{KeyboardError, KeyboardResult};
use crate::version::parse_float_prefix;

const BUILTIN_CATALOG: &str = include_str!("../data/emoji.json");

static BUILTIN: Lazy<Catalog> = Lazy::new(|| match Catalog::from_json(BUILTIN_CATALOG) {
    Ok(catalog) => catalog,
    Err(e) => {
        tracing::error!("Built-in emoji catalog is invalid: {}", e);
        Catalog::default()
    }
});

/// A single emoji entry as shipped in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// The emoji character(s)
    #[serde(rename = "emoji", alias = "glyph")]
    pub glyph: String,

    /// Human-readable name
    pub description: String,

    /// Grouping key for the tab bar
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub aliases: Vec<String>,

    /// Minimum Unicode version required to render
    #[serde(default)]
    pub unicode_version: String,

    /// Minimum iOS version that renders this glyph
    #[serde(default, rename = "ios_version")]
    pub ios_min_version: String,
}

impl EmojiRecord {
    /// Parsed Unicode version, `None` if the field is malformed
    pub fn unicode_version(&self) -> Option<f64> {
        parse_float_prefix(&self.unicode_version)
    }

    /// Parsed iOS version, `None` if the field is malformed
    pub fn ios_min_version(&self) -> Option<f64> {
        parse_float_prefix(&self.ios_min_version)
    }
}

/// Ordered, immutable emoji dataset
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[EmojiRecord]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    /// Build a catalog from records in the given order
    pub fn new(records: Vec<EmojiRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The catalog embedded in the crate
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse a catalog from a JSON array of records
    pub fn from_json(json: &str) -> KeyboardResult<Self> {
        let records: Vec<EmojiRecord> = serde_json::from_str(json)?;

        if let Some(pos) = records.iter().position(|r| r.glyph.is_empty()) {
            return Err(KeyboardError::Catalog(format!(
                "record {} has an empty emoji",
                pos
            )));
        }

        tracing::debug!(records = records.len(), "Parsed emoji catalog");
        Ok(Self::new(records))
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> KeyboardResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load from `path` when given, otherwise fall back to the built-in catalog
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin().clone();
        };

        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(
                    "Failed to load catalog from {}: {}; using built-in",
                    path.display(),
                    e
                );
                Self::builtin().clone()
            }
        }
    }

    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
