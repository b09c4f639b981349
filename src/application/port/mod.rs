// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`player`]: Player construction and control
//!
//! # Example
//!
//! ```ignore
//! use reel_viewer::application::port::{PlayerBackend, PlayerOptions, SurfaceId};
//! use reel_viewer::domain::media::SourceUri;
//!
//! fn preview(backend: &mut impl PlayerBackend, source: &SourceUri) {
//!     let player = backend.create(SurfaceId::new(1), source, PlayerOptions::default());
//!     if let Ok(player) = player {
//!         let _ = player.release();
//!     }
//! }
//! ```

pub mod player;

pub use player::{PlayerBackend, PlayerInstance, PlayerOptions, SurfaceId};
