// SPDX-License-Identifier: MPL-2.0
//! Appearance value objects.
//!
//! [`ThemeMode`] is what the user asked for (and what is persisted under
//! `user-theme`); [`ColorScheme`] is what screens actually paint with.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// ThemeMode
// =============================================================================

/// The user's appearance preference.
///
/// `System` follows the device light/dark signal and is the fallback whenever
/// no valid preference is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// All modes, in the order settings screens list them.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns the persisted representation of this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Parses a stored value. Surrounding whitespace and case are ignored;
    /// anything other than `light`, `dark` or `system` yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }

    /// Resolves the scheme to paint with, given the current device signal.
    #[must_use]
    pub fn effective(self, system: ColorScheme) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::Light,
            ThemeMode::Dark => ColorScheme::Dark,
            ThemeMode::System => system,
        }
    }

    /// Returns the translation key for this mode's label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
            ThemeMode::System => "theme-system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a valid [`ThemeMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidThemeMode(pub String);

impl fmt::Display for InvalidThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid theme mode: {}", self.0)
    }
}

impl std::error::Error for InvalidThemeMode {}

impl FromStr for ThemeMode {
    type Err = InvalidThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidThemeMode(s.to_string()))
    }
}

// =============================================================================
// ColorScheme
// =============================================================================

/// The effective light/dark scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// Also used when the device cannot report a preference.
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScheme::Light => f.write_str("light"),
            ColorScheme::Dark => f.write_str("dark"),
        }
    }
}
