// SPDX-License-Identifier: MPL-2.0
//! Default values for launcher settings.

/// Language used when neither storage nor the device names a supported one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Interval between device light/dark polls, in milliseconds.
pub const DEFAULT_SYSTEM_POLL_INTERVAL_MS: u64 = 2000;

/// Lower bound for the poll interval.
pub const MIN_SYSTEM_POLL_INTERVAL_MS: u64 = 100;

/// `tracing-subscriber` filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Preference store file name inside the data directory.
pub const DEFAULT_STORE_FILE: &str = "preferences.cbor";
