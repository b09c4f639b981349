// SPDX-License-Identifier: MPL-2.0
//! Gesture newtypes.

use crate::config::{
    DEFAULT_DEBOUNCE_WINDOW_MS, MAX_DEBOUNCE_WINDOW_MS, MIN_DEBOUNCE_WINDOW_MS,
};
use std::time::Duration;

/// Window during which repeated swipes are coalesced into one intent.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (50–5000 milliseconds).
///
/// # Example
///
/// ```
/// use reel_viewer::domain::gesture::DebounceWindow;
///
/// let window = DebounceWindow::new(500);
/// assert_eq!(window.value(), 500);
///
/// // Values outside range are clamped
/// let too_low = DebounceWindow::new(0);
/// assert_eq!(too_low.value(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceWindow(u64);

impl DebounceWindow {
    /// Creates a new debounce window, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_DEBOUNCE_WINDOW_MS, MAX_DEBOUNCE_WINDOW_MS))
    }

    /// Returns the window in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DebounceWindow {
    fn default() -> Self {
        Self(DEFAULT_DEBOUNCE_WINDOW_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(DebounceWindow::new(0).value(), MIN_DEBOUNCE_WINDOW_MS);
        assert_eq!(DebounceWindow::new(60_000).value(), MAX_DEBOUNCE_WINDOW_MS);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(DebounceWindow::new(250).value(), 250);
        assert_eq!(
            DebounceWindow::new(250).as_duration(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn default_matches_swipe_duration() {
        assert_eq!(DebounceWindow::default().value(), 500);
    }
}
