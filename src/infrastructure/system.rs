// SPDX-License-Identifier: MPL-2.0
//! Device locale and light/dark detection.

use crate::application::port::{DeviceLocaleSource, SystemAppearanceSource};
use crate::domain::appearance::ColorScheme;

/// Reads the OS preferred-locale list via `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysLocales;

impl DeviceLocaleSource for SysLocales {
    fn preferred_locales(&self) -> Vec<String> {
        sys_locale::get_locales().collect()
    }
}

/// Reads the OS light/dark setting via `dark-light`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DarkLightAppearance;

impl SystemAppearanceSource for DarkLightAppearance {
    fn current_scheme(&self) -> Option<ColorScheme> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Some(ColorScheme::Dark),
            Ok(dark_light::Mode::Light) => Some(ColorScheme::Light),
            Ok(_) => None,
            Err(err) => {
                tracing::trace!(error = ?err, "system appearance detection failed");
                None
            }
        }
    }
}
