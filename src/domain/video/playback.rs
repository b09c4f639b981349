// SPDX-License-Identifier: MPL-2.0
//! Video playback state.
//!
//! This module defines the playback states a live player can report.

/// Represents the current playback state of a video.
///
/// Players autoplay on creation, so the default is [`PlaybackState::Playing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Video is currently playing.
    #[default]
    Playing,
    /// Video is paused at current position.
    Paused,
}

impl PlaybackState {
    /// Builds the state from a player's `paused` flag.
    #[must_use]
    pub fn from_paused(paused: bool) -> Self {
        if paused {
            Self::Paused
        } else {
            Self::Playing
        }
    }

    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns the state a play/pause toggle leads to.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_playing() {
        assert_eq!(PlaybackState::default(), PlaybackState::Playing);
    }

    #[test]
    fn test_state_checks() {
        assert!(PlaybackState::Playing.is_playing());
        assert!(!PlaybackState::Paused.is_playing());

        assert!(PlaybackState::Paused.is_paused());
        assert!(!PlaybackState::Playing.is_paused());
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(PlaybackState::Playing.toggled(), PlaybackState::Paused);
        assert_eq!(PlaybackState::Paused.toggled(), PlaybackState::Playing);
        assert_eq!(PlaybackState::from_paused(true), PlaybackState::Paused);
        assert_eq!(PlaybackState::from_paused(false), PlaybackState::Playing);
    }
}
