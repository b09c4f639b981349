// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gesture**: Swipe debounce window and mouse emulation
//! - **Playback**: Player transport controls

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default window during which repeated swipes are coalesced (in milliseconds).
pub const DEFAULT_DEBOUNCE_WINDOW_MS: u64 = 500;

/// Minimum debounce window (in milliseconds).
pub const MIN_DEBOUNCE_WINDOW_MS: u64 = 50;

/// Maximum debounce window (in milliseconds).
pub const MAX_DEBOUNCE_WINDOW_MS: u64 = 5_000;

/// Whether mouse drags are accepted as swipes by default.
pub const DEFAULT_ALLOW_MOUSE_AS_TOUCH: bool = true;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Whether the player shows its transport controls by default.
pub const DEFAULT_SHOW_CONTROLS: bool = true;
