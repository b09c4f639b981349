// SPDX-License-Identifier: MPL-2.0
//! Viewer state machine and its async service.
//!
//! - [`controller`]: synchronous state machine over one live player
//! - [`service`]: Tokio task that serializes commands from many producers
//! - [`state`]: commands, transitions and snapshots

pub mod controller;
pub mod service;
pub mod state;

pub use controller::ViewerController;
pub use service::ViewerService;
pub use state::{Transition, ViewerCommand, ViewerSnapshot};
