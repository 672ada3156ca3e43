// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides the translation tables behind the translation
//! provider, using the Fluent localization system.
//!
//! # Features
//!
//! - One embedded `.ftl` table per supported language
//! - Lookups keyed by [`Language`](crate::domain::language::Language), so a
//!   resolved language always has a table to read from
//! - Fallback to the default language for keys a table is missing

pub mod fluent;

pub use fluent::Translator;
