// SPDX-License-Identifier: MPL-2.0
//! Video player port definition.
//!
//! This module defines the [`PlayerBackend`] trait that constructs player
//! instances, and the [`PlayerInstance`] trait for one live player.
//! Infrastructure adapters (an embedded web player, a native decoder, a test
//! double) implement these traits.
//!
//! # Design Notes
//!
//! - Methods are not `async` - the host decides how to wait for readiness
//! - [`PlayerInstance::release`] consumes the instance, so a released player
//!   cannot be touched or released again
//! - Uses domain types only (`SourceUri`, `PlayerInitError`, `DisposeError`)

use crate::config::PlaybackConfig;
use crate::domain::error::{DisposeError, PlayerInitError};
use crate::domain::media::SourceUri;
use std::fmt;

// =============================================================================
// Surface
// =============================================================================

/// Opaque identifier of a host rendering surface (a video element, a
/// texture, a window region) that a player can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

// =============================================================================
// PlayerOptions
// =============================================================================

/// Construction options passed to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerOptions {
    /// Start playback as soon as the player is bound. Always set by the viewer.
    pub autoplay: bool,
    /// Show the player's transport controls.
    pub controls: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            controls: true,
        }
    }
}

impl From<&PlaybackConfig> for PlayerOptions {
    fn from(config: &PlaybackConfig) -> Self {
        Self {
            autoplay: true,
            controls: config.show_controls,
        }
    }
}

// =============================================================================
// Traits
// =============================================================================

/// One live video player bound to a surface.
///
/// # Thread Safety
///
/// Implementations must be `Send` so the viewer can be driven from a
/// service task.
pub trait PlayerInstance: Send {
    /// Resumes playback.
    fn play(&mut self);

    /// Pauses playback at the current position.
    fn pause(&mut self);

    /// Returns whether the player is currently paused.
    fn is_paused(&self) -> bool;

    /// Releases every resource held by the player (timers, listeners,
    /// stream handles).
    ///
    /// # Errors
    ///
    /// Returns a [`DisposeError`] if cleanup did not complete. The instance
    /// is gone either way.
    fn release(self: Box<Self>) -> Result<(), DisposeError>;
}

/// Port for constructing players.
///
/// # Lifecycle
///
/// 1. Host attaches a ready surface
/// 2. `create()` binds a new instance to that surface and source
/// 3. The instance is driven with `play()`/`pause()`
/// 4. `release()` is called exactly once
pub trait PlayerBackend: Send {
    /// Creates a player bound to `surface` that plays `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`PlayerInitError`] if:
    /// - The surface is not attached or not ready
    /// - The source is not playable by this backend
    /// - The underlying player failed to initialize
    fn create(
        &mut self,
        surface: SurfaceId,
        source: &SourceUri,
        options: PlayerOptions,
    ) -> Result<Box<dyn PlayerInstance>, PlayerInitError>;
}
