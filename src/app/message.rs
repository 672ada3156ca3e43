// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::appearance::ThemeMode;
use crate::domain::navigation::Tab;

/// User-driven changes consumed by `App::update`. Each one is an independent
/// sub-flow; none of them restarts the bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Switch the UI language (code such as `hi`).
    SetLanguage(String),
    /// Switch the appearance mode.
    SetTheme(ThemeMode),
    /// A login completed; the payload is stored as the opaque session marker.
    SignIn(String),
    /// Log out and clear the session marker.
    SignOut,
    /// Open a tab of the main set.
    OpenTab(Tab),
    /// Navigate back.
    Back,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional data directory override (for the preference store).
    /// Takes precedence over `ROAMLY_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ROAMLY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Keep preferences in memory for this run only.
    pub ephemeral: bool,
    /// Changes to apply once bootstrap has settled, in order.
    pub messages: Vec<Message>,
}
