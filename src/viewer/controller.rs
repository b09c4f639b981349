// SPDX-License-Identifier: MPL-2.0
//! Viewer controller: the gallery/player state machine.
//!
//! | From       | Command          | Action                              | To         |
//! |------------|------------------|-------------------------------------|------------|
//! | Gallery    | select(i)        | create player for i                 | Playing(i) |
//! | Playing(i) | Advance          | dispose; create for next(i)         | Playing(j) |
//! | Playing(i) | Retreat          | dispose; create for prev(i)         | Playing(j) |
//! | Playing(i) | select(j)        | dispose; create for j               | Playing(j) |
//! | Playing(i) | tap              | toggle play/pause                   | Playing(i) |
//! | Playing(i) | close / detach   | dispose                             | Gallery    |
//!
//! Gestures and taps in the gallery are ignored. A failed creation leaves
//! the viewer in the gallery with no player retained.

use super::state::{Transition, ViewerCommand, ViewerSnapshot};
use crate::application::gesture::{GestureAdapter, SwipeEvent};
use crate::application::port::{PlayerBackend, PlayerOptions, SurfaceId};
use crate::application::query::{NavigationInfo, Navigator, Selection};
use crate::config::Config;
use crate::domain::error::DisposeError;
use crate::domain::gesture::GestureIntent;
use crate::domain::media::{Collection, Item};
use crate::domain::video::PlaybackState;
use crate::error::{Error, Result};
use crate::video_player::PlayerHandle;

/// Internal state. The handle only exists inside `Playing`, so a selection
/// without a live player cannot be represented.
#[derive(Debug, Default)]
enum ViewerState {
    #[default]
    Gallery,
    Playing { index: usize, handle: PlayerHandle },
}

/// Owns the selection, the single live player and the gesture adapter.
pub struct ViewerController<B: PlayerBackend> {
    navigator: Navigator,
    backend: B,
    options: PlayerOptions,
    gestures: GestureAdapter,
    surface: Option<SurfaceId>,
    state: ViewerState,
    last_error: Option<Error>,
    /// Release failure of the last command that released a player.
    dispose_error: Option<DisposeError>,
}

impl<B: PlayerBackend> ViewerController<B> {
    /// Creates a controller in the gallery state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCollection`] if the collection is empty.
    pub fn new(collection: Collection, backend: B, config: &Config) -> Result<Self> {
        let navigator = Navigator::new(collection)?;
        log::info!("Viewer ready with {} items", navigator.len());
        Ok(Self {
            navigator,
            backend,
            options: PlayerOptions::from(&config.playback),
            gestures: GestureAdapter::new(&config.gesture),
            surface: None,
            state: ViewerState::Gallery,
            last_error: None,
            dispose_error: None,
        })
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Dispatches a command to the matching operation.
    pub fn handle(&mut self, command: ViewerCommand) -> Result<Transition> {
        match command {
            ViewerCommand::SelectItem(index) => self.select_item(index),
            ViewerCommand::Gesture(intent) => self.gesture(intent),
            ViewerCommand::Swipe(event) => self.swipe(event),
            ViewerCommand::Tap => Ok(self.tap()),
            ViewerCommand::Close => Ok(self.close()),
            ViewerCommand::AttachSurface(surface) => Ok(self.attach_surface(surface)),
            ViewerCommand::DetachSurface => Ok(self.detach_surface()),
        }
    }

    /// Records the host surface new players bind to.
    ///
    /// A player already running keeps its original surface.
    pub fn attach_surface(&mut self, surface: SurfaceId) -> Transition {
        log::debug!("Attached {}", surface);
        self.surface = Some(surface);
        Transition::SurfaceAttached(surface)
    }

    /// Forgets the host surface, releasing the player bound to it.
    ///
    /// In the gallery nothing is released and the last error is kept.
    pub fn detach_surface(&mut self) -> Transition {
        self.surface = None;
        let (closed, dispose_error) = self.release_current();
        let transition = Transition::SurfaceDetached {
            closed,
            dispose_error,
        };
        if closed.is_some() {
            self.gestures.reset();
            self.record(&transition);
        }
        transition
    }

    /// Opens the player on the item at `index`.
    ///
    /// From the player view this jumps straight to `index`; selecting the
    /// item already playing is ignored.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSelection`] if `index` is out of range (state unchanged)
    /// - [`Error::PlayerInit`] if the player cannot be created (state is Gallery)
    pub fn select_item(&mut self, index: usize) -> Result<Transition> {
        if !self.navigator.contains(index) {
            let err = Error::InvalidSelection {
                index,
                len: self.navigator.len(),
            };
            self.last_error = Some(err.clone());
            return Err(err);
        }
        if self.selection() == Selection::Index(index) {
            return Ok(Transition::Ignored);
        }
        self.switch_to(index)
    }

    /// Moves to the next or previous item. Ignored in the gallery.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlayerInit`] if the new player cannot be created.
    pub fn gesture(&mut self, intent: GestureIntent) -> Result<Transition> {
        let ViewerState::Playing { index, .. } = self.state else {
            log::debug!("Ignoring {:?} in gallery", intent);
            return Ok(Transition::Ignored);
        };

        let target = self.navigator.step(index, intent);
        if target == index {
            // single-item collection
            return Ok(Transition::Ignored);
        }
        self.switch_to(target)
    }

    /// Runs a raw swipe through the gesture adapter, then navigates.
    ///
    /// Swipes in the gallery never reach the adapter, so they do not start
    /// a debounce window.
    pub fn swipe(&mut self, event: SwipeEvent) -> Result<Transition> {
        if matches!(self.state, ViewerState::Gallery) {
            return Ok(Transition::Ignored);
        }
        match self.gestures.interpret(event) {
            Some(intent) => self.gesture(intent),
            None => Ok(Transition::Ignored),
        }
    }

    /// Toggles play/pause on the live player. Ignored in the gallery.
    pub fn tap(&mut self) -> Transition {
        match &mut self.state {
            ViewerState::Playing { handle, .. } => match handle.toggle_play_pause() {
                Some(state) => Transition::Toggled { state },
                None => Transition::Ignored,
            },
            ViewerState::Gallery => Transition::Ignored,
        }
    }

    /// Returns to the gallery, releasing the live player.
    pub fn close(&mut self) -> Transition {
        let (closed, dispose_error) = self.release_current();
        let Some(index) = closed else {
            return Transition::Ignored;
        };
        self.gestures.reset();
        let transition = Transition::Closed {
            index,
            dispose_error,
        };
        self.record(&transition);
        transition
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn selection(&self) -> Selection {
        match self.state {
            ViewerState::Gallery => Selection::None,
            ViewerState::Playing { index, .. } => Selection::Index(index),
        }
    }

    /// Returns the item being played.
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.selection()
            .index()
            .and_then(|index| self.navigator.item(index))
    }

    /// Returns whether the live player is paused, or `None` in the gallery.
    #[must_use]
    pub fn is_paused(&self) -> Option<bool> {
        match &self.state {
            ViewerState::Playing { handle, .. } => handle.is_paused(),
            ViewerState::Gallery => None,
        }
    }

    #[must_use]
    pub fn playback_state(&self) -> Option<PlaybackState> {
        self.is_paused().map(PlaybackState::from_paused)
    }

    /// Number of live players: 0 in the gallery, 1 while playing.
    #[must_use]
    pub fn live_handle_count(&self) -> usize {
        match &self.state {
            ViewerState::Playing { handle, .. } if handle.is_live() => 1,
            _ => 0,
        }
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        self.navigator.navigation_info(self.selection())
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn surface(&self) -> Option<SurfaceId> {
        self.surface
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Returns the release failure of the last command that released a
    /// player, including one followed by a failed creation.
    #[must_use]
    pub fn dispose_error(&self) -> Option<&DisposeError> {
        self.dispose_error.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewerSnapshot {
        ViewerSnapshot {
            selection: self.selection(),
            item: self.current_item().cloned(),
            playback: self.playback_state(),
            navigation: self.navigation_info(),
            last_error: self.last_error.clone(),
            dispose_error: self.dispose_error.clone(),
            surface: self.surface,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Releases the current player (if any) and creates one for `target`.
    ///
    /// The old player is fully released before the backend is asked for the
    /// new one, so two players never coexist.
    fn switch_to(&mut self, target: usize) -> Result<Transition> {
        let item = self
            .navigator
            .item(target)
            .cloned()
            .ok_or(Error::InvalidSelection {
                index: target,
                len: self.navigator.len(),
            })?;

        let (previous, dispose_error) = self.release_current();

        match PlayerHandle::create(&mut self.backend, self.surface, &item, self.options) {
            Ok(handle) => {
                self.state = ViewerState::Playing {
                    index: target,
                    handle,
                };
                let transition = match previous {
                    Some(from) => Transition::Navigated {
                        from,
                        to: target,
                        dispose_error,
                    },
                    None => Transition::Started { index: target },
                };
                log::info!("Playing item {} (index {})", item.id(), target);
                self.record(&transition);
                Ok(transition)
            }
            Err(err) => {
                log::warn!("Failed to create player for item {}: {}", item.id(), err);
                let err = Error::PlayerInit(err);
                self.gestures.reset();
                self.last_error = Some(err.clone());
                self.dispose_error = dispose_error;
                Err(err)
            }
        }
    }

    /// Moves to the gallery, returning the released index and any release error.
    fn release_current(&mut self) -> (Option<usize>, Option<DisposeError>) {
        match std::mem::take(&mut self.state) {
            ViewerState::Gallery => (None, None),
            ViewerState::Playing { index, mut handle } => {
                let dispose_error = handle.dispose().err();
                if let Some(err) = &dispose_error {
                    log::warn!("Failed to release player for index {}: {}", index, err);
                }
                (Some(index), dispose_error)
            }
        }
    }

    fn record(&mut self, transition: &Transition) {
        self.dispose_error = transition.dispose_error().cloned();
        self.last_error = self.dispose_error.clone().map(Error::Dispose);
    }
}
