// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Domain errors are wrapped here so every public operation can return the
//! same [`Result`]. Each variant maps to an i18n key for user-facing messages.

use crate::domain::error::{CollectionError, DisposeError, PlayerInitError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The collection cannot be navigated (empty, duplicate ids, ...).
    #[error("Invalid collection: {0}")]
    InvalidCollection(CollectionError),

    /// A selection pointed outside the collection.
    #[error("Selection {index} is out of range for {len} items")]
    InvalidSelection { index: usize, len: usize },

    /// The player could not be created; the viewer is back in the gallery.
    #[error("Player Error: {0}")]
    PlayerInit(PlayerInitError),

    /// Releasing a player failed. Never blocks the next player.
    #[error("Dispose Error: {0}")]
    Dispose(DisposeError),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("I/O Error: {0}")]
    Io(String),

    /// The viewer service task has stopped and no longer accepts commands.
    #[error("Viewer service is not running")]
    ServiceStopped,
}

impl Error {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::InvalidCollection(err) => err.i18n_key(),
            Error::InvalidSelection { .. } => "error-invalid-selection",
            Error::PlayerInit(err) => err.i18n_key(),
            Error::Dispose(err) => err.i18n_key(),
            Error::Config(_) => "error-config",
            Error::Io(_) => "error-io",
            Error::ServiceStopped => "error-service-stopped",
        }
    }

    /// Returns true if the viewer can keep running after this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::InvalidCollection(_) | Error::ServiceStopped)
    }
}

impl From<CollectionError> for Error {
    fn from(err: CollectionError) -> Self {
        Error::InvalidCollection(err)
    }
}

impl From<PlayerInitError> for Error {
    fn from(err: PlayerInitError) -> Self {
        Error::PlayerInit(err)
    }
}

impl From<DisposeError> for Error {
    fn from(err: DisposeError) -> Self {
        Error::Dispose(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
