// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (read-side)
//! - [`gesture`]: Swipe-to-intent translation
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure adapters implement application layer ports
//! - The viewer controller composes application layer services
//!
//! # Example
//!
//! ```ignore
//! use reel_viewer::application::port::PlayerBackend;
//! use reel_viewer::application::query::Navigator;
//!
//! // Infrastructure implements the port trait
//! struct WebPlayerBackend { /* ... */ }
//! impl PlayerBackend for WebPlayerBackend { /* ... */ }
//!
//! // Application services use domain types
//! let navigator = Navigator::new(collection)?;
//! ```

pub mod gesture;
pub mod port;
pub mod query;
