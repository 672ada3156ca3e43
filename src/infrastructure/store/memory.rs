// SPDX-License-Identifier: MPL-2.0
//! In-process preference storage.
//!
//! Used for `--ephemeral` launches and tests. Reads and writes can be made
//! to fail on demand to exercise the fallback paths.

use crate::application::port::{PreferenceStore, StoreError};
use crate::domain::preference::{PreferenceKey, PreferenceRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A [`PreferenceStore`] that keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `records`.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = PreferenceRecord>) -> Self {
        let store = Self::new();
        store
            .values()
            .extend(records.into_iter().map(|record| (record.key, record.value)));
        store
    }

    /// Makes every subsequent `get` fail (or succeed again).
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `set` and `remove` fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Writes directly, bypassing failure injection.
    pub fn set_sync(&self, key: PreferenceKey, value: &str) {
        self.values()
            .insert(key.as_str().to_string(), value.to_string());
    }

    /// Reads directly, bypassing failure injection.
    #[must_use]
    pub fn get_sync(&self, key: PreferenceKey) -> Option<String> {
        self.values().get(key.as_str()).cloned()
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_writes(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("simulated write failure".to_string()));
        }
        Ok(())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("simulated read failure".to_string()));
        }
        Ok(self.values().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_writes()?;
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check_writes()?;
        self.values().remove(key);
        Ok(())
    }
}
