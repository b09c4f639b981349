// SPDX-License-Identifier: MPL-2.0
//! Circular navigation over the media collection.
//!
//! [`Navigator`] owns the fixed collection and answers "what comes next"
//! with wrap-around at both ends. It holds no current position: the viewer
//! controller owns the [`Selection`] and asks the navigator for neighbours.

use crate::domain::error::CollectionError;
use crate::domain::gesture::GestureIntent;
use crate::domain::media::{Collection, Item};
use crate::error::{Error, Result};

/// The current navigation state: the gallery, or one item of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Gallery view, nothing playing.
    #[default]
    None,
    /// Player view for the item at this index.
    Index(usize),
}

impl Selection {
    /// Returns the selected index, if any.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Index(index) => Some(index),
        }
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        matches!(self, Selection::None)
    }
}

/// Navigation state information for UI rendering.
///
/// A read-only snapshot so the host can render position indicators without
/// touching the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationInfo {
    /// Current position in the list (0-indexed), if an item is selected.
    pub current_index: Option<usize>,
    /// Index a forward swipe would land on.
    pub next_index: Option<usize>,
    /// Index a backward swipe would land on.
    pub previous_index: Option<usize>,
    /// Total number of items in the collection.
    pub total_count: usize,
}

/// Circular navigator over a non-empty collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    collection: Collection,
}

impl Navigator {
    /// Creates a navigator for the given collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCollection`] if the collection is empty.
    pub fn new(collection: Collection) -> Result<Self> {
        if collection.is_empty() {
            return Err(Error::InvalidCollection(CollectionError::Empty));
        }
        Ok(Self { collection })
    }

    /// Index after `index`, wrapping to the first item after the last.
    #[must_use]
    pub fn next(&self, index: usize) -> usize {
        debug_assert!(index < self.len(), "index {index} out of range");
        (index + 1) % self.len()
    }

    /// Index before `index`, wrapping to the last item before the first.
    #[must_use]
    pub fn prev(&self, index: usize) -> usize {
        debug_assert!(index < self.len(), "index {index} out of range");
        let len = self.len();
        (index % len + len - 1) % len
    }

    /// Index reached from `index` by a gesture intent.
    #[must_use]
    pub fn step(&self, index: usize, intent: GestureIntent) -> usize {
        match intent {
            GestureIntent::Advance => self.next(index),
            GestureIntent::Retreat => self.prev(index),
        }
    }

    /// Returns true if `index` points into the collection.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.len()
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.collection.get(index)
    }

    /// Number of items. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Always false: an empty collection is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Returns a snapshot of the navigation state around `selection`.
    #[must_use]
    pub fn navigation_info(&self, selection: Selection) -> NavigationInfo {
        let current_index = selection.index().filter(|&i| self.contains(i));
        NavigationInfo {
            current_index,
            next_index: current_index.map(|i| self.next(i)),
            previous_index: current_index.map(|i| self.prev(i)),
            total_count: self.len(),
        }
    }
}
