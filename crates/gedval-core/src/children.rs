//! # Tri-State Child Collections
//!
//! A record's child collection is in exactly one of three states:
//!
//! ```text
//! Absent ──(materialize)──▶ Empty ──(push)──▶ Populated
//! ```
//!
//! `Absent` means the collection was never built by upstream code. It is
//! distinct from `Empty`: the validation engine reports or repairs an
//! absent collection, while an empty one is always valid.
//!
//! The wrapper serializes transparently as the inner `Option<Vec<T>>`, so
//! record fields should carry `#[serde(default, skip_serializing_if =
//! "Children::is_absent")]` to keep absent collections out of the output.

use serde::{Deserialize, Serialize};

/// Observable state of a [`Children`] collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionState {
    /// Never materialized.
    Absent,
    /// Present with no entries.
    Empty,
    /// Present with at least one entry.
    Populated,
}

impl CollectionState {
    /// Whether the collection exists (empty or populated).
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl std::fmt::Display for CollectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Absent => "ABSENT",
            Self::Empty => "EMPTY",
            Self::Populated => "POPULATED",
        };
        f.write_str(s)
    }
}

/// An ordered, exclusively owned collection of child records that may be
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Children<T>(Option<Vec<T>>);

impl<T> Children<T> {
    /// An absent collection.
    pub const fn absent() -> Self {
        Self(None)
    }

    /// A present, empty collection.
    pub const fn empty() -> Self {
        Self(Some(Vec::new()))
    }

    /// The current state of the collection.
    pub fn state(&self) -> CollectionState {
        match &self.0 {
            None => CollectionState::Absent,
            Some(items) if items.is_empty() => CollectionState::Empty,
            Some(_) => CollectionState::Populated,
        }
    }

    /// Whether the collection was never materialized.
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// The entries, or `None` when absent.
    pub fn get(&self) -> Option<&[T]> {
        self.0.as_deref()
    }

    /// Mutable access to the entries, or `None` when absent.
    pub fn get_mut(&mut self) -> Option<&mut Vec<T>> {
        self.0.as_mut()
    }

    /// Mutable access to the entries, materializing an empty collection
    /// first if absent.
    pub fn get_or_create(&mut self) -> &mut Vec<T> {
        self.0.get_or_insert_with(Vec::new)
    }

    /// Append an entry, materializing the collection if absent.
    pub fn push(&mut self, item: T) {
        self.get_or_create().push(item);
    }

    /// Number of entries. Absent collections have none.
    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, Vec::len)
    }

    /// Whether there are no entries (absent or empty).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the entries. Absent collections yield nothing.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.get().unwrap_or(&[]).iter()
    }
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Vec<T>> for Children<T> {
    fn from(items: Vec<T>) -> Self {
        Self(Some(items))
    }
}

impl<T> FromIterator<T> for Children<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(Some(iter.into_iter().collect()))
    }
}
