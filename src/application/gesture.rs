// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-intent adapter.
//!
//! The host's gesture recognizer does the pointer math and reports resolved
//! swipes; [`GestureAdapter`] filters them and turns them into at most one
//! [`GestureIntent`] per debounce window.

use crate::config::GestureConfig;
use crate::domain::gesture::{DebounceWindow, GestureIntent, PointerKind, SwipeDirection};
use std::time::Instant;

/// A resolved swipe reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeEvent {
    pub direction: SwipeDirection,
    pub pointer: PointerKind,
    /// When the swipe was recognized.
    pub at: Instant,
}

impl SwipeEvent {
    /// Creates a touch swipe recognized at `at`.
    #[must_use]
    pub fn touch(direction: SwipeDirection, at: Instant) -> Self {
        Self {
            direction,
            pointer: PointerKind::Touch,
            at,
        }
    }

    /// Creates a mouse-drag swipe recognized at `at`.
    #[must_use]
    pub fn mouse(direction: SwipeDirection, at: Instant) -> Self {
        Self {
            direction,
            pointer: PointerKind::Mouse,
            at,
        }
    }
}

/// Debouncing translator from swipes to navigation intents.
#[derive(Debug, Clone)]
pub struct GestureAdapter {
    window: DebounceWindow,
    allow_mouse_as_touch: bool,
    last_emitted: Option<Instant>,
}

impl GestureAdapter {
    #[must_use]
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            window: config.debounce_window(),
            allow_mouse_as_touch: config.allow_mouse_as_touch,
            last_emitted: None,
        }
    }

    /// Returns the intent for this swipe, or `None` if it is filtered out.
    ///
    /// A swipe is dropped when it has no vertical intent, when it comes from
    /// a mouse and mouse emulation is off, or when it lands inside the
    /// debounce window of the previously emitted intent.
    pub fn interpret(&mut self, event: SwipeEvent) -> Option<GestureIntent> {
        if event.pointer == PointerKind::Mouse && !self.allow_mouse_as_touch {
            log::debug!("Ignoring mouse swipe {:?}: mouse emulation disabled", event.direction);
            return None;
        }

        let intent = event.direction.intent()?;

        if let Some(last) = self.last_emitted {
            // saturating: events may arrive slightly out of order
            if event.at.saturating_duration_since(last) < self.window.as_duration() {
                log::debug!("Debounced {:?} swipe", event.direction);
                return None;
            }
        }

        self.last_emitted = Some(event.at);
        Some(intent)
    }

    /// Forgets the last emitted intent so the next swipe is accepted.
    pub fn reset(&mut self) {
        self.last_emitted = None;
    }

    #[must_use]
    pub fn window(&self) -> DebounceWindow {
        self.window
    }
}

impl Default for GestureAdapter {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}
