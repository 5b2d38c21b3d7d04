//! Domain types for normalized tag lists.

use std::collections::HashSet;

use serde::Serialize;

/// An ordered collection of unique tag strings.
///
/// Uniqueness is enforced on construction: duplicate tokens (exact
/// string equality, case-sensitive) are dropped, keeping the first
/// occurrence and its position. Serializes as a plain JSON array of
/// strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    /// Builds a tag list from trimmed, non-empty tokens, deduplicating
    /// while preserving first-occurrence order.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let mut tags = Vec::new();
        for token in tokens {
            if seen.insert(token.clone()) {
                tags.push(token);
            }
        }
        Self { tags }
    }

    /// Returns the tags in first-occurrence order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Consumes the list, returning the underlying vector.
    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
