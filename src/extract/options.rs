//! Extraction options.
//!
//! Options can be built in code with the `with_*` methods or loaded from a
//! JSON document. Keys use camelCase and every key is optional:
//!
//! ```json
//! {
//!   "normalizeUnicode": true,
//!   "removeDuplicates": false,
//!   "removePunctuation": true,
//!   "includeCharacters": ["，。", "*"],
//!   "excludeCharacters": "的"
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::char_set::CharList;
use crate::error::{HanziError, Result};

/// Configuration for a Chinese character extraction.
///
/// # Defaults
///
/// - `normalize_unicode`: `true`
/// - `remove_duplicates`: `false`
/// - `remove_punctuation`: `true`
/// - `include_characters` / `exclude_characters`: empty
/// - `whitespace_matches_any`: `false`
///
/// # Examples
///
/// ```
/// use hanzi_extract::extract::ExtractOptions;
///
/// let options = ExtractOptions::default()
///     .with_remove_duplicates(true)
///     .with_include_characters("，。");
///
/// assert!(options.normalize_unicode);
/// assert!(options.remove_duplicates);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractOptions {
    /// Apply NFKC normalization before classification.
    pub normalize_unicode: bool,

    /// Keep only the first occurrence of each character.
    pub remove_duplicates: bool,

    /// Leave Chinese punctuation out of the allowed set.
    pub remove_punctuation: bool,

    /// Characters always kept, unless also excluded.
    pub include_characters: CharList,

    /// Characters always removed.
    pub exclude_characters: CharList,

    /// A whitespace character in the include or exclude list stands for
    /// every whitespace character.
    pub whitespace_matches_any: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            normalize_unicode: true,
            remove_duplicates: false,
            remove_punctuation: true,
            include_characters: CharList::new(),
            exclude_characters: CharList::new(),
            whitespace_matches_any: false,
        }
    }
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalize_unicode(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    pub fn with_remove_duplicates(mut self, remove: bool) -> Self {
        self.remove_duplicates = remove;
        self
    }

    pub fn with_remove_punctuation(mut self, remove: bool) -> Self {
        self.remove_punctuation = remove;
        self
    }

    /// Set the include list from a string, a list of strings or a set of strings.
    pub fn with_include_characters<L: Into<CharList>>(mut self, characters: L) -> Self {
        self.include_characters = characters.into();
        self
    }

    /// Set the exclude list from a string, a list of strings or a set of strings.
    pub fn with_exclude_characters<L: Into<CharList>>(mut self, characters: L) -> Self {
        self.exclude_characters = characters.into();
        self
    }

    pub fn with_whitespace_matches_any(mut self, enabled: bool) -> Self {
        self.whitespace_matches_any = enabled;
        self
    }

    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: ExtractOptions = serde_json::from_str(json)?;
        Ok(options)
    }

    /// Load options from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| HanziError::unreadable(path.display().to_string(), e))?;

        Self::from_json(&content).map_err(|e| {
            HanziError::config(format!(
                "Failed to parse options JSON from '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
