use unicode_normalization::char::{canonical_combining_class, decompose_compatible};
use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfkc, is_nfkc_quick};

use super::{CharFilter, Transformation};
use crate::analysis::char_set::CharSet;
use crate::analysis::unicode_range::{CHINESE_CHARACTERS_AND_PUNCTUATION, is_chinese_punctuation};

/// A char filter that performs NFKC normalization.
///
/// Protected characters are copied verbatim and act as normalization
/// boundaries: the text between two protected characters is normalized on its
/// own, so composition never reaches across a protected character. A
/// protected character whose NFKC form would expand to several code points
/// stays a single code point.
#[derive(Clone, Debug, Default)]
pub struct UnicodeNormalizationCharFilter {
    protected: CharSet,
    protect_punctuation: bool,
}

impl UnicodeNormalizationCharFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters that must keep their original code point.
    pub fn with_protected(mut self, protected: CharSet) -> Self {
        self.protected = protected;
        self
    }

    /// Keep Chinese punctuation marks as they are.
    pub fn with_protected_punctuation(mut self, protect: bool) -> Self {
        self.protect_punctuation = protect;
        self
    }

    fn is_protected(&self, c: char) -> bool {
        self.protected.contains(c) || (self.protect_punctuation && is_chinese_punctuation(c))
    }

    /// Normalize `input[start..end]` and record a transformation if it changed.
    fn normalize_segment(
        input: &str,
        start: usize,
        end: usize,
        output: &mut String,
        transformations: &mut Vec<Transformation>,
    ) {
        if start == end {
            return;
        }

        let segment = &input[start..end];
        let new_start = output.len();
        if is_nfkc(segment) {
            output.push_str(segment);
            return;
        }

        output.extend(segment.nfkc());
        let new_end = output.len();
        if &output[new_start..new_end] != segment {
            transformations.push(Transformation::new(start, end, new_start, new_end));
        }
    }
}

/// True when nothing before `c` can compose with it or be reordered past it.
///
/// That holds when the compatibility decomposition of `c` starts with a
/// starter that never combines with a preceding character. Splitting the
/// text before such a character leaves the NFKC result unchanged, and keeps
/// each rewritten range down to one source character plus any combining
/// marks that follow it.
fn starts_segment(c: char) -> bool {
    if c.is_ascii()
        || CHINESE_CHARACTERS_AND_PUNCTUATION.contains(c)
        || ('\u{ff01}'..='\u{ff5e}').contains(&c)
    {
        return true;
    }

    let mut first = None;
    decompose_compatible(c, |d| {
        first.get_or_insert(d);
    });
    first.is_some_and(|d| {
        canonical_combining_class(d) == 0
            && is_nfkc_quick(std::iter::once(d)) == IsNormalized::Yes
    })
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        if self.protected.is_empty() && !self.protect_punctuation && is_nfkc(input) {
            return (input.to_string(), Vec::new());
        }

        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut segment_start = 0;

        for (i, c) in input.char_indices() {
            if self.is_protected(c) {
                Self::normalize_segment(input, segment_start, i, &mut output, &mut transformations);
                output.push(c);
                segment_start = i + c.len_utf8();
            } else if i > segment_start && starts_segment(c) {
                Self::normalize_segment(input, segment_start, i, &mut output, &mut transformations);
                segment_start = i;
            }
        }
        Self::normalize_segment(
            input,
            segment_start,
            input.len(),
            &mut output,
            &mut transformations,
        );

        log::trace!(
            "NFKC rewrote {} segment(s) of {} bytes",
            transformations.len(),
            input.len()
        );

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_set::CharList;

    fn protected(chars: &str) -> UnicodeNormalizationCharFilter {
        UnicodeNormalizationCharFilter::new().with_protected(CharSet::from_list(&CharList::from(chars)))
    }

    #[test]
    fn test_nfkc_normalization() {
        let filter = UnicodeNormalizationCharFilter::new();
        // Fullwidth "Ａ" to halfwidth "A"
        let (output, _) = filter.filter("\u{ff21}");
        assert_eq!(output, "A");

        // "Amélie" where 'é' is decomposed (U+0065 U+0301)
        let (output, _) = filter.filter("Am\u{0065}\u{0301}lie");
        assert_eq!(output, "Am\u{00e9}lie");
    }

    #[test]
    fn test_compatibility_ideographs() {
        let filter = UnicodeNormalizationCharFilter::new();
        let (output, transformations) = filter.filter("\u{f90a}\u{f90b}\u{f90c}\u{f90e}");
        assert_eq!(output, "金喇奈癩");
        assert_eq!(transformations.len(), 4);

        let (output, _) = filter.filter("\u{2f00}\u{2fd5}\u{2f59}");
        assert_eq!(output, "\u{4e00}\u{9fa0}\u{723f}");
    }

    #[test]
    fn test_already_normalized_has_no_transformations() {
        let filter = UnicodeNormalizationCharFilter::new();
        let (output, transformations) = filter.filter("全民制作人们大家好");
        assert_eq!(output, "全民制作人们大家好");
        assert!(transformations.is_empty());
    }

    #[test]
    fn test_transformations_are_per_character() {
        let filter = UnicodeNormalizationCharFilter::new();
        // "ａ" is 3 bytes, "a" is 1 byte
        let (output, transformations) = filter.filter("ａ中ｂ");
        assert_eq!(output, "a中b");
        assert_eq!(
            transformations,
            vec![Transformation::new(0, 3, 0, 1), Transformation::new(6, 9, 4, 5)]
        );
    }

    #[test]
    fn test_protected_characters_are_kept() {
        let filter = protected("\u{f91c}\u{f91d}\u{f91e}\u{f91f}\u{f920}\u{f921}");
        let (output, _) = filter.filter(
            "\u{f916}\u{f917}\u{f918}\u{f919}\u{f91a}\u{f91b}\u{f91c}\u{f91d}\u{f91e}\u{f91f}\u{f920}\u{f921}",
        );
        assert_eq!(
            output,
            "烙珞落酪駱亂\u{f91c}\u{f91d}\u{f91e}\u{f91f}\u{f920}\u{f921}"
        );
    }

    #[test]
    fn test_protected_expansion_stays_single_code_point() {
        let (output, _) = UnicodeNormalizationCharFilter::new().filter("㍿");
        assert_eq!(output, "株式会社");

        let (output, transformations) = protected("㍿").filter("㍿ａ");
        assert_eq!(output, "㍿a");
        assert_eq!(transformations, vec![Transformation::new(3, 6, 3, 4)]);
    }

    #[test]
    fn test_expansion_is_its_own_segment() {
        let filter = UnicodeNormalizationCharFilter::new();
        // "x" 1 byte, "㍿" 3 bytes, "株式会社" 12 bytes
        let (output, transformations) = filter.filter("x㍿");
        assert_eq!(output, "x株式会社");
        assert_eq!(transformations, vec![Transformation::new(1, 4, 1, 13)]);

        // "é" 2 bytes, "㌂" 3 bytes, "アンペア" 12 bytes
        let (output, transformations) = filter.filter("\u{00e9}㌂");
        assert_eq!(output, "\u{00e9}アンペア");
        assert_eq!(transformations, vec![Transformation::new(2, 5, 2, 14)]);
    }

    #[test]
    fn test_combining_marks_stay_with_their_base() {
        let filter = UnicodeNormalizationCharFilter::new();
        // "ｅ" 3 bytes, U+0301 2 bytes, "é" 2 bytes
        let (output, transformations) = filter.filter("ｅ\u{0301}中");
        assert_eq!(output, "\u{00e9}中");
        assert_eq!(transformations, vec![Transformation::new(0, 5, 0, 2)]);

        assert!(starts_segment('㍿'));
        assert!(starts_segment('\u{00e9}'));
        assert!(!starts_segment('\u{0301}'));
        // Hangul vowel jamo composes with a leading consonant
        assert!(!starts_segment('\u{1161}'));
    }

    #[test]
    fn test_protected_character_blocks_composition() {
        // The combining acute accent is protected, so it does not compose with "e"
        let (output, _) = protected("\u{0301}").filter("e\u{0301}");
        assert_eq!(output, "e\u{0301}");
    }

    #[test]
    fn test_protected_punctuation() {
        let (output, _) = UnicodeNormalizationCharFilter::new().filter("你好，世界…");
        assert_eq!(output, "你好,世界...");

        let filter = UnicodeNormalizationCharFilter::new().with_protected_punctuation(true);
        let (output, _) = filter.filter("你好，世界…ＡＢ");
        assert_eq!(output, "你好，世界…AB");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(UnicodeNormalizationCharFilter::new().name(), "unicode_normalization");
    }
}
