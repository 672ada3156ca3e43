// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! filesystem, `sys-locale` and `dark-light`.
//!
//! # Available Adapters
//!
//! - [`store`]: CBOR file and in-memory preference stores (implement [`PreferenceStore`])
//! - [`system`]: device locale list and light/dark detection
//!   (implement [`DeviceLocaleSource`] and [`SystemAppearanceSource`])
//!
//! [`PreferenceStore`]: crate::application::port::PreferenceStore
//! [`DeviceLocaleSource`]: crate::application::port::DeviceLocaleSource
//! [`SystemAppearanceSource`]: crate::application::port::SystemAppearanceSource

pub mod store;
pub mod system;

// Re-export main types for convenience
pub use store::{FilePreferenceStore, MemoryPreferenceStore};
pub use system::{DarkLightAppearance, SysLocales};
