// SPDX-License-Identifier: MPL-2.0
//! Video player lifecycle.
//!
//! The concrete player lives behind the
//! [`PlayerBackend`](crate::application::port::PlayerBackend) port; this
//! module owns the scoped acquire/release wrapper around it.

pub mod handle;

pub use handle::PlayerHandle;
