// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! Items, their identifiers and sources, and the fixed collection the
//! viewer navigates.

pub mod types;

pub use types::{Collection, Item, ItemId, SourceUri};
