// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and state rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`appearance`]: [`ThemeMode`](appearance::ThemeMode) preference and the
//!   effective [`ColorScheme`](appearance::ColorScheme)
//! - [`language`]: the supported [`Language`](language::Language) set
//! - [`navigation`]: opaque [`Route`](navigation::Route)s and the main [`Tab`](navigation::Tab)s
//! - [`preference`]: persisted [`PreferenceKey`](preference::PreferenceKey) layout
//! - [`session`]: the [`SessionState`](session::SessionState) machine

pub mod appearance;
pub mod language;
pub mod navigation;
pub mod preference;
pub mod session;
