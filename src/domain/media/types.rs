// SPDX-License-Identifier: MPL-2.0
//! Core media types for the reel.
//!
//! An [`Item`] is one playable video; a [`Collection`] is the ordered,
//! immutable list of items fixed at startup.

use crate::domain::error::CollectionError;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// ItemId
// =============================================================================

/// Stable identifier of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// SourceUri
// =============================================================================

/// URI of the video an item plays.
///
/// Surrounding whitespace is trimmed; a blank URI is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceUri(String);

impl SourceUri {
    /// Parses a source URI, returning `None` if it is blank.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the scheme part (`https`, `file`, ...), if present.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.0
            .split_once("://")
            .map(|(scheme, _)| scheme)
            .filter(|scheme| !scheme.is_empty())
    }
}

impl fmt::Display for SourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Item
// =============================================================================

/// One playable video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    source: SourceUri,
}

impl Item {
    #[must_use]
    pub fn new(id: ItemId, source: SourceUri) -> Self {
        Self { id, source }
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> &SourceUri {
        &self.source
    }
}

// =============================================================================
// Collection
// =============================================================================

/// Ordered, immutable list of items.
///
/// Cloning is cheap: the items are shared behind an `Arc`. A collection may
/// be empty; navigation over it is refused by
/// [`Navigator::new`](crate::application::query::Navigator::new).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collection {
    items: Arc<[Item]>,
}

impl Collection {
    /// Builds a collection, rejecting duplicate item ids.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateId`] for the first repeated id.
    pub fn new(items: Vec<Item>) -> Result<Self, CollectionError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CollectionError::DuplicateId(item.id()));
            }
        }
        Ok(Self {
            items: items.into(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Returns the position of the item with the given id.
    #[must_use]
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
