// SPDX-License-Identifier: MPL-2.0
//! Supported UI languages.
//!
//! The app ships a fixed set of translation tables. [`Language`] can only
//! name a member of that set, so a resolved language is always displayable.

use std::fmt;

/// A language the app has translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
    German,
}

impl Language {
    /// Every supported language, default first.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Spanish,
        Language::German,
    ];

    /// Fallback when neither storage nor the device names a supported language.
    pub const DEFAULT: Language = Language::English;

    /// Returns the primary language subtag used in storage and asset names.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Spanish => "es",
            Language::German => "de",
        }
    }

    /// Looks up a language by its primary subtag (case-insensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Native name, as shown in a language picker.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Spanish => "Español",
            Language::German => "Deutsch",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
