// SPDX-License-Identifier: MPL-2.0
//! Owned lifecycle wrapper around one live player instance.
//!
//! A [`PlayerHandle`] is created bound to one item and one surface, and is
//! released exactly once: by [`PlayerHandle::dispose`], or on drop if the
//! owner never disposed it.

use crate::application::port::{PlayerBackend, PlayerInstance, PlayerOptions, SurfaceId};
use crate::domain::error::{DisposeError, PlayerInitError};
use crate::domain::media::{Item, ItemId, SourceUri};
use crate::domain::video::PlaybackState;
use std::fmt;

pub struct PlayerHandle {
    item_id: ItemId,
    source: SourceUri,
    surface: SurfaceId,
    /// `None` once disposed.
    instance: Option<Box<dyn PlayerInstance>>,
}

impl PlayerHandle {
    /// Creates a player for `item` on `surface`.
    ///
    /// The player starts playing immediately (`options.autoplay` is forced on).
    ///
    /// # Errors
    ///
    /// Returns [`PlayerInitError::SurfaceNotReady`] if `surface` is `None`,
    /// or whatever the backend reports when binding fails.
    pub fn create(
        backend: &mut dyn PlayerBackend,
        surface: Option<SurfaceId>,
        item: &Item,
        options: PlayerOptions,
    ) -> Result<Self, PlayerInitError> {
        let surface = surface.ok_or(PlayerInitError::SurfaceNotReady)?;
        let options = PlayerOptions {
            autoplay: true,
            ..options
        };

        let instance = backend.create(surface, item.source(), options)?;
        log::debug!("Created player for item {} on {}", item.id(), surface);

        Ok(Self {
            item_id: item.id(),
            source: item.source().clone(),
            surface,
            instance: Some(instance),
        })
    }

    /// Pauses if playing, resumes if paused.
    ///
    /// Returns the new state, or `None` (and does nothing) after disposal.
    pub fn toggle_play_pause(&mut self) -> Option<PlaybackState> {
        let instance = self.instance.as_mut()?;
        match PlaybackState::from_paused(instance.is_paused()).toggled() {
            PlaybackState::Playing => instance.play(),
            PlaybackState::Paused => instance.pause(),
        }
        Some(PlaybackState::from_paused(instance.is_paused()))
    }

    /// Returns whether the player is paused, or `None` after disposal.
    #[must_use]
    pub fn is_paused(&self) -> Option<bool> {
        self.instance.as_ref().map(|instance| instance.is_paused())
    }

    /// Returns the playback state, or `None` after disposal.
    #[must_use]
    pub fn playback_state(&self) -> Option<PlaybackState> {
        self.is_paused().map(PlaybackState::from_paused)
    }

    /// Releases the underlying player.
    ///
    /// Idempotent: only the first call reaches the backend, later calls
    /// return `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`DisposeError`]. The handle is disposed either way.
    pub fn dispose(&mut self) -> Result<(), DisposeError> {
        match self.instance.take() {
            Some(instance) => {
                log::debug!("Releasing player for item {}", self.item_id);
                instance.release()
            }
            None => Ok(()),
        }
    }

    /// Returns true until the handle is disposed.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.instance.is_some()
    }

    #[must_use]
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    #[must_use]
    pub fn source(&self) -> &SourceUri {
        &self.source
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }
}

impl Drop for PlayerHandle {
    fn drop(&mut self) {
        if let Err(err) = self.dispose() {
            log::warn!("Player for item {} dropped with error: {}", self.item_id, err);
        }
    }
}

impl fmt::Debug for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerHandle")
            .field("item_id", &self.item_id)
            .field("source", &self.source)
            .field("surface", &self.surface)
            .field("live", &self.is_live())
            .finish()
    }
}
