// SPDX-License-Identifier: MPL-2.0
//! `roamly` is the startup core of the Roamly travel-booking app.
//!
//! On cold start it resolves the persisted appearance preference, resolves
//! the UI language from storage or the device, and sends returning users
//! straight past the landing screen into the main tab set. Each of these
//! publishes to an observable value that screens subscribe to, so first
//! paint never waits on storage.

#![doc(html_root_url = "https://docs.rs/roamly/0.3.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod navigation;
