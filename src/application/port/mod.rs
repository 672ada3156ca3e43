// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters and
//! the navigation shell implement. These traits use only domain types,
//! ensuring the application layer remains independent of concrete storage,
//! device APIs and routers.
//!
//! # Available Ports
//!
//! - [`store`]: durable preference storage
//! - [`device`]: device locale list and light/dark signal
//! - [`navigation`]: route replacement and the mount signal
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can be shared behind `Arc`
//! - Storage methods are asynchronous and return `Result` with [`StoreError`]
//! - Device sources are synchronous snapshots; callers decide when to poll

pub mod device;
pub mod navigation;
pub mod store;

// Re-export main types for convenience
pub use device::{DeviceLocaleSource, SystemAppearanceSource};
pub use navigation::{MountSignal, Navigator};
pub use store::{PreferenceStore, StoreError};
