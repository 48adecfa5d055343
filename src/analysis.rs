//! Text analysis module for hanzi-extract.
//!
//! This module provides the building blocks of the extraction: the static
//! Unicode range tables, literal character sets from user lists, and the
//! char filters that normalize, classify and deduplicate text.

pub mod char_filter;
pub mod char_set;
pub mod unicode_range;

// Re-export commonly used types
pub use char_filter::{CharFilter, Transformation};
pub use char_set::{CharList, CharSet};
pub use unicode_range::{CodePointRange, CodePointRanges, is_chinese, is_chinese_punctuation};
