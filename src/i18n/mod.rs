// SPDX-License-Identifier: MPL-2.0
//! Localization of user-facing messages using Fluent.
//!
//! Translations are embedded from `assets/i18n/*.ftl`. The locale comes from
//! an explicit argument, the config file, or the system, falling back to
//! `en-US`.

pub mod fluent;

pub use fluent::I18n;
