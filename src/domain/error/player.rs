// SPDX-License-Identifier: MPL-2.0
//! Player lifecycle errors.
//!
//! Creation failures are recoverable (the viewer falls back to the gallery),
//! release failures are best-effort and never block the next player.

use std::fmt;

/// Failure to bind a new player instance to its surface and source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInitError {
    /// No rendering surface is attached, or the backend reports it is not ready.
    SurfaceNotReady,

    /// The backend cannot play this source (unknown scheme, unsupported host).
    UnsupportedSource(String),

    /// Any other backend failure, with its raw message.
    Backend(String),
}

impl PlayerInitError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlayerInitError::SurfaceNotReady => "error-player-surface-not-ready",
            PlayerInitError::UnsupportedSource(_) => "error-player-unsupported-source",
            PlayerInitError::Backend(_) => "error-player-backend",
        }
    }
}

impl fmt::Display for PlayerInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerInitError::SurfaceNotReady => write!(f, "Rendering surface is not ready"),
            PlayerInitError::UnsupportedSource(source) => {
                write!(f, "Unsupported source: {}", source)
            }
            PlayerInitError::Backend(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PlayerInitError {}

/// Failure while releasing a player's resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisposeError {
    message: String,
}

impl DisposeError {
    /// Creates a dispose error carrying the backend's message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the backend's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        "error-player-dispose"
    }
}

impl fmt::Display for DisposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to release player: {}", self.message)
    }
}

impl std::error::Error for DisposeError {}
