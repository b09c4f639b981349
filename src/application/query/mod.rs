// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! Read-only operations over the collection, free of side effects.

pub mod navigation;

pub use navigation::{NavigationInfo, Navigator, Selection};
