//! The NestedText value tree — the shared data model for the parser and
//! serializer.
//!
//! A [`Value`] is one of a string, an ordered list of values, or an ordered
//! mapping from string keys to values. There are no other scalar types: a
//! NestedText document that looks like a number or a boolean is still just a
//! string, by design (see the crate-level documentation).

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed (or to-be-serialized) NestedText value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A (possibly multi-line) string. Internal newlines are part of the
    /// value; no trailing newline is implied.
    String(String),
    /// An ordered sequence of values. Duplicates are permitted.
    List(Vec<Value>),
    /// An ordered mapping from string keys to values, preserving insertion
    /// order. After parsing, each key appears exactly once (see
    /// [`crate::options::DuplicateKeyPolicy`]).
    Mapping(Mapping),
}

impl Value {
    /// Borrow this value as a `&str`, if it is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow this value as a slice of values, if it is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow this value as a [`Mapping`], if it is a [`Value::Mapping`].
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

/// An ordered mapping from string keys to [`Value`]s.
///
/// Backed by [`indexmap::IndexMap`] so that key order is insertion order and
/// lookups remain average O(1) — the combination the duplicate-key policies
/// in [`crate::options`] depend on (use-last must overwrite a value in place
/// without disturbing the key's original position).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mapping(IndexMap<String, Value>);

impl Mapping {
    pub fn new() -> Self {
        Mapping(IndexMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Mapping(IndexMap::with_capacity(capacity))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert a key-value pair, appending it at the end of iteration order.
    /// If the key already existed, its value is replaced but its original
    /// position in the order is preserved (matching the *use-last*
    /// duplicate-key policy).
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Sort entries in place by key, using the given comparator.
    pub fn sort_by_key(&mut self, mut cmp: impl FnMut(&str, &str) -> std::cmp::Ordering) {
        self.0.sort_by(|k1, _, k2, _| cmp(k1, k2));
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Mapping(IndexMap::from_iter(iter))
    }
}
