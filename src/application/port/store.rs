// SPDX-License-Identifier: MPL-2.0
//! Preference store port.
//!
//! A durable key/value store that survives process restarts. Every operation
//! is asynchronous and may fail; the bootstrap core treats any failed read as
//! "absent" and never lets it block startup.

use std::fmt;
use std::future::Future;

// =============================================================================
// StoreError
// =============================================================================

/// Errors a preference store can report.
///
/// Returned from [`PreferenceStore::get`], any of these is a
/// preference read failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing storage cannot be reached (no data directory, device locked).
    Unavailable(String),

    /// The stored data could not be decoded.
    Corrupt(String),

    /// The process is not allowed to read or write the storage.
    PermissionDenied(String),

    /// Any other I/O failure.
    Io(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Preference storage unavailable: {msg}"),
            StoreError::Corrupt(msg) => write!(f, "Preference storage corrupt: {msg}"),
            StoreError::PermissionDenied(msg) => {
                write!(f, "Preference storage permission denied: {msg}")
            }
            StoreError::Io(msg) => write!(f, "Preference storage I/O error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => StoreError::PermissionDenied(err.to_string()),
            _ => StoreError::Io(err.to_string()),
        }
    }
}

// =============================================================================
// PreferenceStore
// =============================================================================

/// Durable key/value storage for user preferences and the session marker.
///
/// Implementations must be shareable across tasks; writes to the same key
/// are last-write-wins.
pub trait PreferenceStore: Send + Sync {
    /// Reads a value. `Ok(None)` means the key has never been written (or was removed).
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Writes a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Deletes a value. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}
