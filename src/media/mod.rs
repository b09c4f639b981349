// SPDX-License-Identifier: MPL-2.0
//! Loading media collections from disk.

pub mod playlist;

pub use playlist::{load_playlist, parse_playlist, PlaylistEntry, PlaylistFile};
