use ahash::AHashSet;

use super::{CharFilter, Transformation};

/// A char filter that keeps only the first occurrence of each character.
///
/// Comparison is by code point, so simplified and traditional forms of the
/// same character (国 and 國) are distinct and both survive.
#[derive(Clone, Debug, Default)]
pub struct DeduplicateCharFilter;

impl DeduplicateCharFilter {
    pub fn new() -> Self {
        DeduplicateCharFilter
    }
}

impl CharFilter for DeduplicateCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut seen = AHashSet::new();
        let mut removed_from: Option<usize> = None;

        for (i, c) in input.char_indices() {
            if seen.insert(c) {
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
        "deduplicate"
    }
}
