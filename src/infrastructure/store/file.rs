// SPDX-License-Identifier: MPL-2.0
//! Preference storage in a CBOR file.
//!
//! All preferences live in one CBOR-encoded string map in the app data
//! directory, kept apart from the user-editable `settings.toml`.
//!
//! # Path Resolution
//!
//! The store file location can be customized for testing or portable deployments:
//! 1. Use [`FilePreferenceStore::new`] with an explicit path
//! 2. Set `ROAMLY_DATA_DIR` environment variable (or `--data-dir`)
//! 3. Falls back to platform-specific data directory

use crate::app::paths;
use crate::application::port::{PreferenceStore, StoreError};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

type PreferenceMap = BTreeMap<String, String>;

/// A [`PreferenceStore`] backed by a single CBOR file.
///
/// A missing file is an empty store. Writes rewrite the whole map through a
/// temporary file and a rename, so readers never observe a half-written file.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Opens `file_name` inside the app data directory.
    ///
    /// Returns `None` if the data directory cannot be determined (rare edge case).
    #[must_use]
    pub fn in_data_dir(file_name: &str, base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(file_name);
            Self::new(path)
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<file name>.tmp` next to the store file.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn read_map(&self) -> Result<PreferenceMap, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(PreferenceMap::new()),
            Err(err) => return Err(err.into()),
        };
        ciborium::from_reader(bytes.as_slice()).map_err(|err| StoreError::Corrupt(err.to_string()))
    }

    /// Reads the map for a read-modify-write. A corrupt file is replaced.
    async fn read_map_for_update(&self) -> Result<PreferenceMap, StoreError> {
        match self.read_map().await {
            Err(StoreError::Corrupt(reason)) => {
                tracing::warn!(path = %self.path.display(), %reason, "replacing corrupt preference file");
                Ok(PreferenceMap::new())
            }
            other => other,
        }
    }

    async fn write_map(&self, map: &PreferenceMap) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut bytes = Vec::new();
        ciborium::into_writer(map, &mut bytes).map_err(|err| StoreError::Io(err.to_string()))?;

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map_for_update().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map_for_update().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}
