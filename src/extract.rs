//! Chinese character extraction.
//!
//! This module ties the analysis pieces together: [`ExtractOptions`]
//! describes what to keep, [`ChineseExtractor`] compiles the options into a
//! chain of char filters, and [`extract_chinese`] is the one-shot entry point.
//!
//! # Examples
//!
//! ```
//! use hanzi_extract::extract::{ExtractOptions, extract_chinese};
//!
//! assert_eq!(extract_chinese("Hello 你好!", &ExtractOptions::default()), "你好");
//!
//! let options = ExtractOptions::default().with_include_characters("，。");
//! assert_eq!(extract_chinese("反，反，复。", &options), "反，反，复。");
//! ```

pub mod extractor;
pub mod options;

pub use extractor::{ChineseExtractor, ExtractedChar};
pub use options::ExtractOptions;

/// Extract the Chinese characters of `input` according to `options`.
///
/// Never fails. Build a [`ChineseExtractor`] instead when the same options
/// are used for many inputs.
pub fn extract_chinese(input: &str, options: &ExtractOptions) -> String {
    ChineseExtractor::new(options.clone()).extract(input)
}
