//! Scope and selection type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A caller-supplied vocabulary, not yet trusted.
///
/// Consumed once during registry construction; the tag list may contain
/// duplicates, which validation removes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawScope {
    /// Scope name; must be non-empty and contain neither '[' nor ']'
    pub name: String,

    /// Declared canonical checksum of the tag list
    pub checksum: String,

    /// Tag vocabulary in declaration order
    pub tags: Vec<String>,
}

/// A named subset of a scope's tags.
///
/// As encode input, tag order is free and duplicates are legal (they
/// collapse into the bitset). As decode output, tags appear in ascending
/// index order with no duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagSelection {
    /// Name of the scope the tags belong to
    pub name: String,

    /// Selected tags
    pub tags: Vec<String>,
}

impl TagSelection {
    pub fn new(name: impl Into<String>, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// A checksum-verified vocabulary with a frozen tag→index assignment.
///
/// Invariants, established by validation and never broken afterwards:
/// `tags` is duplicate-free, `index_of(&tags[i])` is
/// `Some(i)` for every position, and the canonical checksum of `tags`
/// equals `checksum()`. Fields are private so the frozen state cannot be
/// mutated from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidScope {
    pub(crate) name: String,
    pub(crate) checksum: String,
    pub(crate) tags: Vec<String>,
    pub(crate) tag_index: HashMap<String, usize>,
}

impl ValidScope {
    /// Scope name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The verified canonical checksum.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Tags in index order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Number of tags in the vocabulary.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the vocabulary has no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The index assigned to `tag`, if it belongs to this scope.
    pub fn index_of(&self, tag: &str) -> Option<usize> {
        self.tag_index.get(tag).copied()
    }

    /// The tag at `index`, if in range.
    pub fn tag_at(&self, index: usize) -> Option<&str> {
        self.tags.get(index).map(String::as_str)
    }
}
