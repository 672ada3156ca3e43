// SPDX-License-Identifier: MPL-2.0
//! Persisted preference layout.

use std::fmt;

/// The keys the bootstrap core reads from the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    /// `light`, `dark` or `system`.
    Theme,
    /// A supported language code.
    Language,
    /// Presence-only marker left by a successful login. The payload is opaque.
    Session,
}

impl PreferenceKey {
    /// Returns the storage key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PreferenceKey::Theme => "user-theme",
            PreferenceKey::Language => "user-language",
            PreferenceKey::Session => "userInfo",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored key/value pair. A key holds at most one value; the last write wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceRecord {
    pub key: String,
    pub value: String,
}

impl PreferenceRecord {
    #[must_use]
    pub fn new(key: PreferenceKey, value: impl Into<String>) -> Self {
        Self {
            key: key.as_str().to_string(),
            value: value.into(),
        }
    }
}
