//! User-supplied character lists and the lookup sets built from them.
//!
//! A [`CharList`] is what callers hand in for `include_characters` and
//! `exclude_characters`: a string, a list of strings or a set of strings.
//! It is flattened into a [`CharSet`] of individual code points. Every
//! character is literal; there is no pattern syntax, so `*`, `.`, `-`, `[`
//! and `]` only ever match themselves.
//!
//! # Examples
//!
//! ```
//! use hanzi_extract::analysis::char_set::{CharList, CharSet};
//!
//! let list = CharList::from(vec!["，。", "*"]);
//! let set = CharSet::from_list(&list);
//!
//! assert!(set.contains('，'));
//! assert!(set.contains('*'));
//! assert!(!set.contains('a'));
//! ```

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use ahash::AHashSet;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A caller-supplied list of characters.
///
/// Each entry may hold any number of characters; multi-character entries
/// contribute every character they contain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharList {
    entries: Vec<String>,
}

impl CharList {
    /// Create an empty list.
    pub fn new() -> Self {
        CharList::default()
    }

    /// Append an entry.
    pub fn push<S: Into<String>>(&mut self, entry: S) {
        self.entries.push(entry.into());
    }

    /// Iterate over every character of every entry, in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().flat_map(|entry| entry.chars())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// True when the list contributes no characters.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|entry| entry.is_empty())
    }
}

impl From<&str> for CharList {
    fn from(text: &str) -> Self {
        CharList {
            entries: vec![text.to_string()],
        }
    }
}

impl From<String> for CharList {
    fn from(text: String) -> Self {
        CharList {
            entries: vec![text],
        }
    }
}

impl From<char> for CharList {
    fn from(c: char) -> Self {
        CharList {
            entries: vec![c.to_string()],
        }
    }
}

impl<S: Into<String>> From<Vec<S>> for CharList {
    fn from(entries: Vec<S>) -> Self {
        entries.into_iter().collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for CharList {
    fn from(entries: [S; N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<S: Into<String>, H> From<HashSet<S, H>> for CharList {
    fn from(entries: HashSet<S, H>) -> Self {
        entries.into_iter().collect()
    }
}

impl<S: Into<String>> From<BTreeSet<S>> for CharList {
    fn from(entries: BTreeSet<S>) -> Self {
        entries.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for CharList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        CharList {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CharList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            f.write_str(entry)?;
        }
        Ok(())
    }
}

impl Serialize for CharList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCharList {
    Text(String),
    Entries(Vec<RawEntry>),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for CharList {
    /// Accepts a string or an array. Array entries that are not strings are
    /// skipped, and any other value yields an empty list.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let list = match RawCharList::deserialize(deserializer)? {
            RawCharList::Text(text) => CharList::from(text),
            RawCharList::Entries(entries) => entries
                .into_iter()
                .filter_map(|entry| match entry {
                    RawEntry::Text(text) => Some(text),
                    RawEntry::Other(_) => {
                        log::warn!("Ignoring non-text entry in character list");
                        None
                    }
                })
                .collect(),
            RawCharList::Other(_) => {
                log::warn!("Ignoring character list that is neither text nor an array");
                CharList::new()
            }
        };
        Ok(list)
    }
}

/// A set of literal characters used for include/exclude lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharSet {
    chars: AHashSet<char>,
    /// Any whitespace character matches when the list held whitespace.
    any_whitespace: bool,
}

impl CharSet {
    /// Create an empty set.
    pub fn new() -> Self {
        CharSet::default()
    }

    /// Flatten a list into a set of its characters.
    pub fn from_list(list: &CharList) -> Self {
        list.chars().collect()
    }

    /// Let a whitespace character in the list stand for every whitespace character.
    ///
    /// Off by default: a space in the list only matches U+0020.
    pub fn with_whitespace_matches_any(mut self, enabled: bool) -> Self {
        self.any_whitespace = enabled && self.chars.iter().any(|c| c.is_whitespace());
        self
    }

    pub fn insert(&mut self, c: char) -> bool {
        self.chars.insert(c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c) || (self.any_whitespace && c.is_whitespace())
    }

    /// A set matching everything either set matches.
    pub fn union(&self, other: &CharSet) -> CharSet {
        CharSet {
            chars: self.chars.union(&other.chars).copied().collect(),
            any_whitespace: self.any_whitespace || other.any_whitespace,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        CharSet {
            chars: iter.into_iter().collect(),
            any_whitespace: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_entries() {
        let list = CharList::from(vec!["ab", "c", "", "字"]);
        let set = CharSet::from_list(&list);

        assert_eq!(set.len(), 4);
        for c in ['a', 'b', 'c', '字'] {
            assert!(set.contains(c));
        }
    }

    #[test]
    fn test_from_sets() {
        let hash_set: HashSet<String> = ["x".to_string(), "yz".to_string()].into_iter().collect();
        let set = CharSet::from_list(&CharList::from(hash_set));
        assert_eq!(set.len(), 3);

        let btree_set: BTreeSet<&str> = ["，", "。"].into_iter().collect();
        let set = CharSet::from_list(&CharList::from(btree_set));
        assert!(set.contains('，'));
        assert!(set.contains('。'));
    }

    #[test]
    fn test_pattern_symbols_are_literal() {
        let set = CharSet::from_list(&CharList::from(r"*.-[]^$\"));

        for c in ['*', '.', '-', '[', ']', '^', '$', '\\'] {
            assert!(set.contains(c));
        }
        assert!(!set.contains('a'));
        assert!(!set.contains(','));
    }

    #[test]
    fn test_supplementary_plane_characters() {
        let set = CharSet::from_list(&CharList::from("𠀀𠜎"));
        assert_eq!(set.len(), 2);
        assert!(set.contains('𠀀'));
        assert!(set.contains('𠜎'));
    }

    #[test]
    fn test_whitespace_literal_by_default() {
        let set = CharSet::from_list(&CharList::from(" "));
        assert!(set.contains(' '));
        assert!(!set.contains('\t'));
        assert!(!set.contains('\u{3000}'));
    }

    #[test]
    fn test_whitespace_matches_any() {
        let set = CharSet::from_list(&CharList::from(" ")).with_whitespace_matches_any(true);
        assert!(set.contains('\t'));
        assert!(set.contains('\n'));
        assert!(set.contains('\u{3000}'));

        // Without whitespace in the list the flag has no effect
        let set = CharSet::from_list(&CharList::from("abc")).with_whitespace_matches_any(true);
        assert!(!set.contains(' '));
    }

    #[test]
    fn test_union() {
        let include = CharSet::from_list(&CharList::from("ab"));
        let exclude = CharSet::from_list(&CharList::from(" c")).with_whitespace_matches_any(true);
        let union = include.union(&exclude);

        for c in ['a', 'b', 'c', ' ', '\t'] {
            assert!(union.contains(c));
        }
    }

    #[test]
    fn test_deserialize_text_and_arrays() {
        let list: CharList = serde_json::from_str(r#""，。""#).unwrap();
        assert_eq!(list.to_string(), "，。");

        let list: CharList = serde_json::from_str(r#"["ab", 1, null, "c", {"x": "y"}]"#).unwrap();
        assert_eq!(list.entries(), &["ab".to_string(), "c".to_string()]);

        let list: CharList = serde_json::from_str("42").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_serialize() {
        let list = CharList::from(vec!["ab", "c"]);
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["ab","c"]"#);
    }
}
