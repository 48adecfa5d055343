//! # hanzi-extract
//!
//! Extract Chinese characters from arbitrary text.
//!
//! ## Features
//!
//! - Static Unicode range tables for CJK ideographs, extensions A-I,
//!   compatibility ideographs, radicals and strokes
//! - NFKC normalization that leaves caller-listed characters alone
//! - Literal include/exclude character sets, where exclusion always wins
//! - Optional Chinese punctuation and duplicate removal
//! - Source offsets for every extracted character
//!
//! ## Example
//!
//! ```
//! use hanzi_extract::prelude::*;
//!
//! let options = ExtractOptions::default().with_remove_duplicates(true);
//! assert_eq!(extract_chinese("反反复复圈圈", &options), "反复圈");
//! ```

pub mod analysis;
pub mod error;
pub mod extract;

pub mod prelude {
    pub use crate::analysis::char_set::CharList;
    pub use crate::error::{HanziError, Result};
    pub use crate::extract::{ChineseExtractor, ExtractOptions, ExtractedChar, extract_chinese};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
