//! Parse-time and emit-time configuration.
//!
//! These options are applied once, at the start of `parse_string`/`emit_string`
//! (and their `_stream`/`_file` counterparts), and do not change mid-document.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// What to do when a mapping contains the same key more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeyPolicy {
    /// Reject the document with a syntax error (default, matches the
    /// reference behavior).
    #[default]
    Error,
    /// Keep the first occurrence's value; later duplicates are discarded.
    UseFirst,
    /// Keep the last occurrence's value, but leave the key at its original
    /// position in iteration order.
    UseLast,
}

/// Parse-time configuration.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// How to handle a mapping key that appears more than once.
    pub on_duplicate: DuplicateKeyPolicy,
}

impl ParseOptions {
    /// Options matching the reference implementation's defaults: duplicate
    /// keys are a syntax error.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_key_policy(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.on_duplicate = policy;
        self
    }
}

/// How mapping keys should be ordered when serializing.
#[derive(Clone, Default)]
pub enum SortKeys {
    /// Preserve the order the keys already have in the `Mapping` (default).
    #[default]
    Off,
    /// Sort keys with `str`'s default `Ord`.
    Natural,
    /// Sort keys with a caller-supplied comparator.
    Custom(Arc<dyn Fn(&str, &str) -> Ordering + Send + Sync>),
}

impl fmt::Debug for SortKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKeys::Off => write!(f, "SortKeys::Off"),
            SortKeys::Natural => write!(f, "SortKeys::Natural"),
            SortKeys::Custom(_) => write!(f, "SortKeys::Custom(..)"),
        }
    }
}

/// Emit-time configuration.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Number of spaces used per indentation level. Must be at least 1.
    pub indent: usize,
    /// Mapping key ordering.
    pub sort_keys: SortKeys,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            indent: 4,
            sort_keys: SortKeys::Off,
        }
    }
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-level indent width. Panics later, at emit time, if set to
    /// zero — sibling lines at different depths would become indistinguishable.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_sort_keys(mut self, sort_keys: SortKeys) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}
