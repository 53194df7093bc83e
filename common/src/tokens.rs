use serde_json::{Map, Value};
use std::collections::{btree_set, BTreeSet};
use std::fmt;

/// Separator between the key codes of a recorded trigram.
pub const TOKEN_SEPARATOR: char = ',';

/// Split a trigram key on every separator.
///
/// Segments are returned untouched: no trimming and no filtering of empty
/// segments, so `""` yields one empty token and `"a,,b"` yields three.
pub fn split_key(key: &str) -> impl Iterator<Item = &str> {
    key.split(TOKEN_SEPARATOR)
}

/// Deduplicated tokens gathered from the keys of a trigram document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenSet(BTreeSet<String>);

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect tokens from every key of a loaded document. Values are ignored.
    pub fn from_document(document: &Map<String, Value>) -> Self {
        Self::from_keys(document.keys())
    }

    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for key in keys {
            set.insert_key(key.as_ref());
        }
        set
    }

    /// Add every token of a single key.
    pub fn insert_key(&mut self, key: &str) {
        for token in split_key(key) {
            if !self.0.contains(token) {
                self.0.insert(token.to_owned());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Renders as `{"a", "b"}`; the empty set renders as `{}`.
impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}
