// SPDX-License-Identifier: MPL-2.0
//! Device signal ports: preferred locales and the light/dark setting.

use crate::domain::appearance::ColorScheme;

/// Source of the device's ordered preferred-locale list (e.g. `["fr-FR", "en-US"]`).
pub trait DeviceLocaleSource: Send + Sync {
    /// Most preferred first. May be empty.
    fn preferred_locales(&self) -> Vec<String>;
}

/// Source of the device-level light/dark setting.
pub trait SystemAppearanceSource: Send + Sync {
    /// Returns `None` when the device does not report a preference.
    fn current_scheme(&self) -> Option<ColorScheme>;
}

/// A fixed locale list, for launches that override device detection.
impl DeviceLocaleSource for Vec<String> {
    fn preferred_locales(&self) -> Vec<String> {
        self.clone()
    }
}

/// A fixed scheme, for launches that override device detection.
impl SystemAppearanceSource for ColorScheme {
    fn current_scheme(&self) -> Option<ColorScheme> {
        Some(*self)
    }
}
