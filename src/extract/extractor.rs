//! Compiled extractor that chains the char filters.
//!
//! The extractor applies processing in this order:
//! 1. NFKC normalization (when `normalize_unicode` is set)
//! 2. Chinese character classification with include/exclude overrides
//! 3. Deduplication (when `remove_duplicates` is set)
//!
//! # Examples
//!
//! ```
//! use hanzi_extract::extract::{ChineseExtractor, ExtractOptions};
//!
//! let extractor = ChineseExtractor::new(ExtractOptions::default().with_remove_duplicates(true));
//!
//! assert_eq!(extractor.extract("反反复复圈圈"), "反复圈");
//! assert_eq!(extractor.extract("The Quick Brown Fox"), "");
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::chinese::ChineseCharFilter;
use crate::analysis::char_filter::deduplicate::DeduplicateCharFilter;
use crate::analysis::char_filter::unicode_normalize::UnicodeNormalizationCharFilter;
use crate::analysis::char_filter::{Transformation, correct_offset};
use crate::analysis::char_set::CharSet;
use crate::extract::options::ExtractOptions;

/// A character that survived extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedChar {
    /// The character as it appears in the output
    pub ch: char,

    /// Byte offset of the source character in the original input
    pub offset: usize,
}

/// Extracts Chinese characters using options compiled once.
///
/// The extractor holds no mutable state and can be shared between threads.
#[derive(Clone)]
pub struct ChineseExtractor {
    options: ExtractOptions,
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl Default for ChineseExtractor {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}

impl ChineseExtractor {
    /// Compile the options into a filter chain.
    pub fn new(options: ExtractOptions) -> Self {
        let include = CharSet::from_list(&options.include_characters);
        let exclude = CharSet::from_list(&options.exclude_characters);
        let keep_punctuation = !options.remove_punctuation;

        let mut char_filters: Vec<Arc<dyn CharFilter>> = Vec::with_capacity(3);

        if options.normalize_unicode {
            // Only the listed characters themselves keep their code point;
            // other whitespace matched through `whitespace_matches_any` is
            // still normalized.
            char_filters.push(Arc::new(
                UnicodeNormalizationCharFilter::new()
                    .with_protected(include.union(&exclude))
                    .with_protected_punctuation(keep_punctuation),
            ));
        }

        let include = include.with_whitespace_matches_any(options.whitespace_matches_any);
        let exclude = exclude.with_whitespace_matches_any(options.whitespace_matches_any);

        char_filters.push(Arc::new(
            ChineseCharFilter::new()
                .with_punctuation(keep_punctuation)
                .with_include(include)
                .with_exclude(exclude),
        ));

        if options.remove_duplicates {
            char_filters.push(Arc::new(DeduplicateCharFilter::new()));
        }

        let extractor = ChineseExtractor {
            options,
            char_filters,
        };
        log::debug!("Created {:?}", extractor);
        extractor
    }

    /// Get the options this extractor was built from.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Get the char filters applied, in order.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Extract the Chinese characters of `input`.
    ///
    /// Never fails: input without any Chinese characters yields an empty string.
    pub fn extract(&self, input: &str) -> String {
        let mut text = input.to_string();
        for char_filter in &self.char_filters {
            let (filtered, _) = char_filter.filter(&text);
            text = filtered;
        }
        text
    }

    /// Extract the Chinese characters of `input` along with their source offsets.
    ///
    /// Each offset is the byte position in `input` of the character the
    /// output character came from, and is always a char boundary of `input`.
    /// Every character a normalized expansion produces points at the source
    /// character of that expansion.
    pub fn extract_with_offsets(&self, input: &str) -> Vec<ExtractedChar> {
        let mut text = input.to_string();
        let mut filter_transformations: Vec<Vec<Transformation>> =
            Vec::with_capacity(self.char_filters.len());

        for char_filter in &self.char_filters {
            let (filtered, transformations) = char_filter.filter(&text);
            text = filtered;
            filter_transformations.push(transformations);
        }

        text.char_indices()
            .map(|(offset, ch)| {
                // Map from final -> filter N -> ... -> filter 1 -> original
                let offset = filter_transformations
                    .iter()
                    .rev()
                    .fold(offset, |offset, transformations| {
                        correct_offset(offset, transformations)
                    });
                ExtractedChar {
                    ch,
                    offset: floor_char_boundary(input, offset),
                }
            })
            .collect()
    }

    /// Extract from UTF-16 code units.
    ///
    /// Unpaired surrogates are dropped.
    pub fn extract_utf16(&self, input: &[u16]) -> String {
        let decoded: String = char::decode_utf16(input.iter().copied())
            .filter_map(|unit| match unit {
                Ok(c) => Some(c),
                Err(e) => {
                    log::trace!("Dropping unpaired surrogate {:#06x}", e.unpaired_surrogate());
                    None
                }
            })
            .collect();
        self.extract(&decoded)
    }

    /// Extract from bytes that may not be valid UTF-8.
    ///
    /// Invalid byte sequences are dropped.
    pub fn extract_lossy(&self, input: &[u8]) -> String {
        let decoded: String = input.utf8_chunks().map(|chunk| chunk.valid()).collect();
        self.extract(&decoded)
    }

    /// Extract from many inputs in parallel.
    ///
    /// Results are returned in input order.
    pub fn extract_all<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<String> {
        inputs
            .par_iter()
            .map(|input| self.extract(input.as_ref()))
            .collect()
    }
}

/// Largest char boundary of `text` not after `offset`.
///
/// Interpolated offsets inside an expansion can land in the middle of the
/// source character; rounding down lands on its first byte.
fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

impl std::fmt::Debug for ChineseExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChineseExtractor")
            .field("options", &self.options)
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
