// SPDX-License-Identifier: MPL-2.0
//! Errors raised while building or validating a media collection.

use crate::domain::media::ItemId;
use std::fmt;

/// Reasons a collection cannot be used for navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The collection has no items; circular navigation is undefined.
    Empty,

    /// Two items share the same identifier.
    DuplicateId(ItemId),

    /// An item has a blank source URI.
    EmptySource(ItemId),
}

impl CollectionError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CollectionError::Empty => "error-collection-empty",
            CollectionError::DuplicateId(_) => "error-collection-duplicate-id",
            CollectionError::EmptySource(_) => "error-collection-empty-source",
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::Empty => write!(f, "collection is empty"),
            CollectionError::DuplicateId(id) => write!(f, "duplicate item id {}", id),
            CollectionError::EmptySource(id) => write!(f, "item {} has an empty source", id),
        }
    }
}

impl std::error::Error for CollectionError {}
