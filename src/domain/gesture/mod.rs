// SPDX-License-Identifier: MPL-2.0
//! Gesture domain types.
//!
//! Raw swipe input is described by [`SwipeDirection`] and [`PointerKind`];
//! the viewer only ever acts on the abstract [`GestureIntent`].

pub mod newtypes;

pub use newtypes::DebounceWindow;

/// Navigation intent derived from a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureIntent {
    /// Move to the next item (wraps to the first after the last).
    Advance,
    /// Move to the previous item (wraps to the last before the first).
    Retreat,
}

/// Direction of a resolved swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    /// Maps a swipe to its navigation intent.
    ///
    /// Swiping up advances, swiping down retreats; horizontal swipes carry
    /// no intent.
    #[must_use]
    pub fn intent(self) -> Option<GestureIntent> {
        match self {
            SwipeDirection::Up => Some(GestureIntent::Advance),
            SwipeDirection::Down => Some(GestureIntent::Retreat),
            SwipeDirection::Left | SwipeDirection::Right => None,
        }
    }
}

/// Input device that produced a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerKind {
    #[default]
    Touch,
    /// Mouse drag emulating a touch swipe.
    Mouse,
}
