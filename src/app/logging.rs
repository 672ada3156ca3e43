// SPDX-License-Identifier: MPL-2.0
//! Log output for the launcher.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job. `RUST_LOG` wins over the configured filter.

use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber. Safe to call more than once; only
/// the first call installs anything.
pub fn init(configured_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured_filter))
        .unwrap_or_else(|_| EnvFilter::new(super::config::DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
