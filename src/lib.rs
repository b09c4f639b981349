// SPDX-License-Identifier: MPL-2.0
//! `reel_viewer` drives a full-screen vertical video reel.
//!
//! A gallery of videos becomes a swipeable player: choosing a thumbnail opens
//! a player for that item, vertical swipes move to the next or previous video
//! with wraparound, and a tap toggles play/pause. At most one player is alive
//! at any time; the previous one is released before the next is created.
//!
//! Rendering and decoding are left to the host, which plugs in through the
//! [`application::port::PlayerBackend`] trait and observes
//! [`viewer::ViewerSnapshot`]s.

#![doc(html_root_url = "https://docs.rs/reel_viewer/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod video_player;
pub mod viewer;

pub use error::{Error, Result};
