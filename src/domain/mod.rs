// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`PlayerInitError`](error::PlayerInitError),
//!   [`DisposeError`](error::DisposeError), [`CollectionError`](error::CollectionError))
//! - [`gesture`]: Swipe input and navigation intents ([`GestureIntent`](gesture::GestureIntent),
//!   [`DebounceWindow`](gesture::DebounceWindow))
//! - [`media`]: Items and the fixed collection ([`Item`](media::Item),
//!   [`Collection`](media::Collection))
//! - [`video`]: Playback state ([`PlaybackState`](video::PlaybackState))

pub mod error;
pub mod gesture;
pub mod media;
pub mod video;
