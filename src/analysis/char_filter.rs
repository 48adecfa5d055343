//! Char filter implementations for Chinese character extraction.
//!
//! Each stage of the extraction is a filter over the whole text string. A
//! filter returns the rewritten text together with the byte ranges it
//! rewrote, so that positions in the output can be mapped back to the input.
//!
//! # Available Filters
//!
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - NFKC normalization with protected characters
//! - [`chinese::ChineseCharFilter`] - Keeps Chinese characters and user includes, drops the rest
//! - [`deduplicate::DeduplicateCharFilter`] - Keeps the first occurrence of each character
//!
//! # Examples
//!
//! ```
//! use hanzi_extract::analysis::char_filter::CharFilter;
//! use hanzi_extract::analysis::char_filter::deduplicate::DeduplicateCharFilter;
//!
//! let filter = DeduplicateCharFilter::new();
//! let (output, transformations) = filter.filter("反反复复");
//!
//! assert_eq!(output, "反复");
//! assert_eq!(transformations.len(), 2);
//! ```

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }

    /// A range of the original text removed at `new_position` of the new text.
    pub fn deletion(original_start: usize, original_end: usize, new_position: usize) -> Self {
        Self::new(original_start, original_end, new_position, new_position)
    }
}

/// Trait for character filters that transform text.
///
/// Implementations can modify the text content and return the modified text
/// along with a list of transformations that occurred, ordered by position.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// - The filtered text.
    /// - A vector of `Transformation`s describing changes made.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Map a byte offset in filtered text back to the text the filter received.
///
/// Offsets inside a rewritten range are interpolated linearly.
pub fn correct_offset(offset: usize, transformations: &[Transformation]) -> usize {
    let mut corrected = offset;
    for t in transformations {
        if offset >= t.new_end {
            // After this transformation: undo its length difference.
            let original_len = t.original_end - t.original_start;
            let new_len = t.new_end - t.new_start;
            corrected = (corrected as isize - new_len as isize + original_len as isize) as usize;
        } else if offset >= t.new_start {
            let offset_in_new = offset - t.new_start;
            let new_len = t.new_end - t.new_start;
            let original_len = t.original_end - t.original_start;
            return t.original_start + (offset_in_new * original_len) / new_len;
        } else {
            break;
        }
    }
    corrected
}

pub mod chinese;
pub mod deduplicate;
pub mod unicode_normalize;
