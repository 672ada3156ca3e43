// SPDX-License-Identifier: MPL-2.0
//! Session state machine.
//!
//! ```text
//! Unknown ─┬─ marker found ─▶ Authenticated
//!          └─ no marker ────▶ Anonymous
//! Authenticated ── sign out ─▶ Anonymous
//! Anonymous ────── sign in ──▶ Authenticated
//! ```
//!
//! Transition methods return `None` for moves the machine does not allow;
//! callers keep their current state in that case.

/// Whether a prior login is known to this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// Before the cold-start probe has read the session marker.
    #[default]
    Unknown,
    Anonymous,
    Authenticated,
}

impl SessionState {
    /// Settles the cold-start probe. Only valid from `Unknown`.
    #[must_use]
    pub fn resolve(self, marker_present: bool) -> Option<Self> {
        match self {
            SessionState::Unknown if marker_present => Some(SessionState::Authenticated),
            SessionState::Unknown => Some(SessionState::Anonymous),
            _ => None,
        }
    }

    /// Records a completed login.
    #[must_use]
    pub fn sign_in(self) -> Option<Self> {
        match self {
            SessionState::Unknown | SessionState::Anonymous => Some(SessionState::Authenticated),
            SessionState::Authenticated => None,
        }
    }

    /// Records a logout. Only valid from `Authenticated`.
    #[must_use]
    pub fn sign_out(self) -> Option<Self> {
        match self {
            SessionState::Authenticated => Some(SessionState::Anonymous),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        matches!(self, SessionState::Authenticated)
    }
}
