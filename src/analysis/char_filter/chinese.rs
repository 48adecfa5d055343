//! Chinese character classification filter.
//!
//! Keeps every character that is in the Chinese range table or the include
//! set, unless it is in the exclude set. Exclusion always wins over
//! inclusion, and inclusion wins over range membership.

use super::{CharFilter, Transformation};
use crate::analysis::char_set::CharSet;
use crate::analysis::unicode_range::{
    CHINESE_CHARACTERS, CHINESE_CHARACTERS_AND_PUNCTUATION, CodePointRanges,
};

/// A char filter that removes everything that is not a Chinese character.
#[derive(Clone, Debug)]
pub struct ChineseCharFilter {
    ranges: &'static CodePointRanges,
    include: CharSet,
    exclude: CharSet,
}

impl Default for ChineseCharFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChineseCharFilter {
    /// Create a filter over Chinese characters only, without punctuation.
    pub fn new() -> Self {
        ChineseCharFilter {
            ranges: &*CHINESE_CHARACTERS,
            include: CharSet::new(),
            exclude: CharSet::new(),
        }
    }

    /// Keep Chinese punctuation marks along with the characters.
    pub fn with_punctuation(mut self, keep: bool) -> Self {
        self.ranges = if keep {
            &*CHINESE_CHARACTERS_AND_PUNCTUATION
        } else {
            &*CHINESE_CHARACTERS
        };
        self
    }

    /// Characters kept even when outside the range table.
    pub fn with_include(mut self, include: CharSet) -> Self {
        self.include = include;
        self
    }

    /// Characters always removed.
    pub fn with_exclude(mut self, exclude: CharSet) -> Self {
        self.exclude = exclude;
        self
    }

    /// In the range table or the include set.
    pub fn allowed(&self, c: char) -> bool {
        self.ranges.contains(c) || self.include.contains(c)
    }

    /// In the exclude set.
    pub fn denied(&self, c: char) -> bool {
        self.exclude.contains(c)
    }

    pub fn keeps(&self, c: char) -> bool {
        self.allowed(c) && !self.denied(c)
    }
}

impl CharFilter for ChineseCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        // Start of the pending run of removed characters
        let mut removed_from: Option<usize> = None;

        for (i, c) in input.char_indices() {
            if self.keeps(c) {
                if let Some(start) = removed_from.take() {
                    transformations.push(Transformation::deletion(start, i, output.len()));
                }
                output.push(c);
            } else if removed_from.is_none() {
                removed_from = Some(i);
            }
        }
        if let Some(start) = removed_from {
            transformations.push(Transformation::deletion(start, input.len(), output.len()));
        }

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "chinese"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_set::CharList;

    fn set(chars: &str) -> CharSet {
        CharSet::from_list(&CharList::from(chars))
    }

    #[test]
    fn test_chinese_filter() {
        let filter = ChineseCharFilter::new();
        let (output, _) = filter.filter("Super idol的笑容都没你的甜105度");
        assert_eq!(output, "的笑容都没你的甜度");

        let (output, _) = filter.filter("The Quick Brown Fox");
        assert_eq!(output, "");

        let (output, _) = filter.filter("🎵跳rap籃球music雞你太💄");
        assert_eq!(output, "跳籃球雞你太");
    }

    #[test]
    fn test_other_cjk_scripts_removed() {
        let filter = ChineseCharFilter::new();
        let (output, _) = filter.filter("漢字（中文）、漢字（日本語）、한글（한국어）ひらがなカタカナ");
        assert_eq!(output, "漢字中文漢字日本語");
    }

    #[test]
    fn test_punctuation() {
        let (output, _) = ChineseCharFilter::new().filter("反，反，复。");
        assert_eq!(output, "反反复");

        let filter = ChineseCharFilter::new().with_punctuation(true);
        let (output, _) = filter.filter("反，反，复。!");
        assert_eq!(output, "反，反，复。");
    }

    #[test]
    fn test_include_and_exclude_precedence() {
        let filter = ChineseCharFilter::new()
            .with_include(set("ab中"))
            .with_exclude(set("b中"));

        // Included outside the ranges
        assert!(filter.keeps('a'));
        // Included and excluded
        assert!(!filter.keeps('b'));
        // In the ranges and excluded
        assert!(!filter.keeps('中'));
        // In the ranges only
        assert!(filter.keeps('文'));
        // Neither
        assert!(!filter.keeps('c'));

        let (output, _) = filter.filter("abc中文");
        assert_eq!(output, "a文");
    }

    #[test]
    fn test_deletion_transformations() {
        let filter = ChineseCharFilter::new();
        // "ab" 2 bytes, "中" 3 bytes, "cd" 2 bytes, "文" 3 bytes, "e" 1 byte
        let (output, transformations) = filter.filter("ab中cd文e");
        assert_eq!(output, "中文");
        assert_eq!(
            transformations,
            vec![
                Transformation::deletion(0, 2, 0),
                Transformation::deletion(5, 7, 3),
                Transformation::deletion(10, 11, 6),
            ]
        );
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(ChineseCharFilter::new().name(), "chinese");
    }
}
