// SPDX-License-Identifier: MPL-2.0
//! Commands, transitions and snapshots of the viewer state machine.

use crate::application::gesture::SwipeEvent;
use crate::application::port::SurfaceId;
use crate::application::query::{NavigationInfo, Selection};
use crate::domain::error::DisposeError;
use crate::domain::gesture::GestureIntent;
use crate::domain::media::Item;
use crate::domain::video::PlaybackState;
use crate::error::Error;

/// Input events the viewer accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerCommand {
    /// A thumbnail was chosen in the gallery.
    SelectItem(usize),
    /// An already-recognized navigation intent.
    Gesture(GestureIntent),
    /// A raw swipe, filtered through the gesture adapter first.
    Swipe(SwipeEvent),
    /// The video surface was tapped.
    Tap,
    /// Leave the player and return to the gallery.
    Close,
    /// The host's video surface is ready to bind players to.
    AttachSurface(SurfaceId),
    /// The host's video surface is going away.
    DetachSurface,
}

/// What a command did to the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The command was a no-op in the current state.
    Ignored,
    /// Gallery → Playing.
    Started { index: usize },
    /// Playing → Playing on another item.
    Navigated {
        from: usize,
        to: usize,
        dispose_error: Option<DisposeError>,
    },
    /// Play/pause toggled on the live player.
    Toggled { state: PlaybackState },
    /// Playing → Gallery.
    Closed {
        index: usize,
        dispose_error: Option<DisposeError>,
    },
    SurfaceAttached(SurfaceId),
    /// The surface is gone; `closed` is the index that was playing, if any.
    SurfaceDetached {
        closed: Option<usize>,
        dispose_error: Option<DisposeError>,
    },
}

impl Transition {
    /// Returns the non-fatal release failure carried by this transition.
    #[must_use]
    pub fn dispose_error(&self) -> Option<&DisposeError> {
        match self {
            Transition::Navigated { dispose_error, .. }
            | Transition::Closed { dispose_error, .. }
            | Transition::SurfaceDetached { dispose_error, .. } => dispose_error.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored)
    }
}

/// Read-only view of the viewer for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewerSnapshot {
    pub selection: Selection,
    /// The item being played, if any.
    pub item: Option<Item>,
    pub playback: Option<PlaybackState>,
    pub navigation: NavigationInfo,
    /// The last error the host should show, cleared by the next state change.
    pub last_error: Option<Error>,
    /// Release failure of the last player switch, kept even when the
    /// following creation failed and `last_error` holds that failure.
    pub dispose_error: Option<DisposeError>,
    pub surface: Option<SurfaceId>,
}

impl ViewerSnapshot {
    /// Returns true if the gallery should be rendered.
    #[must_use]
    pub fn is_gallery(&self) -> bool {
        self.selection.is_none()
    }
}
