//! Static Unicode range tables for Chinese characters and punctuation.
//!
//! The tables are plain constant data. Membership tests go through
//! [`CodePointRanges`], which keeps the intervals sorted and merged so that a
//! lookup is a binary search.
//!
//! # Examples
//!
//! ```
//! use hanzi_extract::analysis::unicode_range::{is_chinese, is_chinese_punctuation};
//!
//! assert!(is_chinese('中'));
//! assert!(is_chinese('𠀀'));
//! assert!(!is_chinese('A'));
//! assert!(is_chinese_punctuation('，'));
//! ```

use std::sync::LazyLock;

/// A closed interval `[start, end]` of Unicode code points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePointRange {
    pub start: u32,
    pub end: u32,
}

impl CodePointRange {
    pub const fn new(start: u32, end: u32) -> Self {
        CodePointRange { start, end }
    }

    pub const fn single(code_point: u32) -> Self {
        CodePointRange {
            start: code_point,
            end: code_point,
        }
    }

    /// Check whether the code point lies inside this interval.
    pub fn contains(&self, code_point: u32) -> bool {
        self.start <= code_point && code_point <= self.end
    }
}

/// Chinese characters: ideographs, extensions, compatibility forms, radicals and strokes.
///
/// Ideographic Description Characters (U+2FF0..U+2FFF) are structural
/// indicators and are not listed. CJK Compatibility (U+3300..U+33FF) and CJK
/// Compatibility Forms (U+FE30..U+FE4F) are not Chinese characters either.
pub const CHINESE_CHARACTER_RANGES: &[CodePointRange] = &[
    CodePointRange::new(0x2e80, 0x2ef3),   // CJK Radicals Supplement
    CodePointRange::new(0x2f00, 0x2fd5),   // Kangxi Radicals
    CodePointRange::new(0x31c0, 0x31e5),   // CJK Strokes, 0x31ef is a description character
    CodePointRange::new(0x3400, 0x4dbf),   // CJK Extension A
    CodePointRange::new(0x4e00, 0x9fff),   // CJK Unified Ideographs
    CodePointRange::new(0xf900, 0xfad9),   // CJK Compatibility Ideographs
    CodePointRange::new(0x20000, 0x2a6df), // CJK Extension B
    CodePointRange::new(0x2a700, 0x2b739), // CJK Extension C
    CodePointRange::new(0x2b740, 0x2b81d), // CJK Extension D
    CodePointRange::new(0x2b820, 0x2cea1), // CJK Extension E
    CodePointRange::new(0x2ceb0, 0x2ebe0), // CJK Extension F
    CodePointRange::new(0x2ebf0, 0x2ee5d), // CJK Extension I
    CodePointRange::new(0x2f800, 0x2fa1d), // CJK Compatibility Ideographs Supplement
    CodePointRange::new(0x30000, 0x3134a), // CJK Extension G
    CodePointRange::new(0x31350, 0x323af), // CJK Extension H
];

/// Punctuation used in Chinese text.
///
/// Only code points of the Unicode punctuation categories (`P*`). Fullwidth
/// and small-form symbols such as `＄`, `＋`, `＝`, `＾` or `～` are symbols
/// (`S*`) and are left out.
pub const CHINESE_PUNCTUATION_RANGES: &[CodePointRange] = &[
    CodePointRange::single(0x00b7),      // Middle dot
    CodePointRange::single(0x2014),      // Em dash
    CodePointRange::new(0x2018, 0x2019), // Single quotation marks
    CodePointRange::new(0x201c, 0x201d), // Double quotation marks
    CodePointRange::single(0x2026),      // Horizontal ellipsis
    CodePointRange::new(0x3001, 0x3003), // Ideographic comma, full stop, ditto mark
    CodePointRange::new(0x3008, 0x3011), // Angle, corner and lenticular brackets
    CodePointRange::new(0x3014, 0x301f), // Tortoise shell brackets, wave dash, quotation marks
    CodePointRange::new(0xfe10, 0xfe19), // Vertical Forms
    CodePointRange::new(0xfe30, 0xfe4f), // CJK Compatibility Forms
    CodePointRange::new(0xfe50, 0xfe52), // Small Form Variants
    CodePointRange::new(0xfe54, 0xfe61),
    CodePointRange::single(0xfe63),
    CodePointRange::single(0xfe68),
    CodePointRange::new(0xfe6a, 0xfe6b),
    CodePointRange::new(0xff01, 0xff03), // Fullwidth punctuation
    CodePointRange::new(0xff05, 0xff0a),
    CodePointRange::new(0xff0c, 0xff0f),
    CodePointRange::new(0xff1a, 0xff1b),
    CodePointRange::new(0xff1f, 0xff20),
    CodePointRange::new(0xff3b, 0xff3d),
    CodePointRange::single(0xff3f),
    CodePointRange::single(0xff5b),
    CodePointRange::single(0xff5d),
    CodePointRange::new(0xff5f, 0xff65), // Fullwidth white parentheses and halfwidth CJK punctuation
];

/// Sorted, non-overlapping code point intervals with binary-search membership.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodePointRanges {
    ranges: Vec<CodePointRange>,
}

impl CodePointRanges {
    /// Build a range set from any collection of intervals.
    ///
    /// Intervals are sorted and overlapping or adjacent intervals are merged.
    /// Intervals with `start > end` are ignored.
    pub fn new<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = CodePointRange>,
    {
        let mut sorted: Vec<CodePointRange> =
            ranges.into_iter().filter(|r| r.start <= r.end).collect();
        sorted.sort_unstable();

        let mut merged: Vec<CodePointRange> = Vec::with_capacity(sorted.len());
        for range in sorted {
            match merged.last_mut() {
                Some(last) if range.start <= last.end.saturating_add(1) => {
                    last.end = last.end.max(range.end);
                }
                _ => merged.push(range),
            }
        }

        CodePointRanges { ranges: merged }
    }

    /// Check whether the character falls in any interval.
    pub fn contains(&self, c: char) -> bool {
        let code_point = c as u32;
        self.ranges
            .binary_search_by(|range| {
                if range.end < code_point {
                    std::cmp::Ordering::Less
                } else if range.start > code_point {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// The merged intervals in ascending order.
    pub fn ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Chinese characters only.
pub static CHINESE_CHARACTERS: LazyLock<CodePointRanges> =
    LazyLock::new(|| CodePointRanges::new(CHINESE_CHARACTER_RANGES.iter().copied()));

/// Chinese punctuation only.
pub static CHINESE_PUNCTUATION: LazyLock<CodePointRanges> =
    LazyLock::new(|| CodePointRanges::new(CHINESE_PUNCTUATION_RANGES.iter().copied()));

/// Chinese characters together with Chinese punctuation.
pub static CHINESE_CHARACTERS_AND_PUNCTUATION: LazyLock<CodePointRanges> = LazyLock::new(|| {
    CodePointRanges::new(
        CHINESE_CHARACTER_RANGES
            .iter()
            .chain(CHINESE_PUNCTUATION_RANGES.iter())
            .copied(),
    )
});

/// Check whether a character belongs to the Chinese character table.
pub fn is_chinese(c: char) -> bool {
    CHINESE_CHARACTERS.contains(c)
}

/// Check whether a character belongs to the Chinese punctuation table.
pub fn is_chinese_punctuation(c: char) -> bool {
    CHINESE_PUNCTUATION.contains(c)
}
