// SPDX-License-Identifier: MPL-2.0
//! Cold-start session probe.
//!
//! Checks for the `userInfo` marker and, when it is present, sends the user
//! straight to the main tab set. Only presence is checked: the marker's
//! payload is never parsed, and no server validation happens here. Screens
//! that need a valid token check it themselves.
//!
//! Ambiguity never authenticates: a failed read is handled like a missing
//! marker and the user sees the landing screen.

use super::observable::{Observable, Subscription};
use super::port::{Navigator, PreferenceStore};
use crate::domain::navigation::Route;
use crate::domain::preference::PreferenceKey;
use crate::domain::session::SessionState;
use crate::error::Result;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinHandle;

/// Owns the process-wide [`SessionState`] and the one-time redirect.
#[derive(Debug)]
pub struct SessionProbe<S, N> {
    store: Arc<S>,
    navigator: Arc<N>,
    state: Observable<SessionState>,
    redirect: Mutex<Option<JoinHandle<bool>>>,
}

impl<S, N> SessionProbe<S, N>
where
    S: PreferenceStore,
    N: Navigator + 'static,
{
    pub fn new(store: Arc<S>, navigator: Arc<N>) -> Self {
        Self {
            store,
            navigator,
            state: Observable::new(SessionState::Unknown),
            redirect: Mutex::new(None),
        }
    }

    /// Reads the session marker once per process.
    ///
    /// When a marker is found, schedules a single `replace` to the main tab
    /// set that runs as soon as the navigator reports it has mounted. Calls
    /// after the first return the settled state without touching storage.
    pub async fn probe(&self) -> SessionState {
        let current = self.state.get();
        if current != SessionState::Unknown {
            tracing::debug!(state = ?current, "session already probed");
            return current;
        }

        let key = PreferenceKey::Session.as_str();
        let marker_present = match self.store.get(key).await {
            Ok(value) => value.is_some(),
            Err(err) => {
                tracing::warn!(key, error = %err, "session marker unreadable, staying on landing");
                false
            }
        };

        let Some(next) = self.state.get().resolve(marker_present) else {
            // Settled by a sign-in or sign-out while the read was in flight.
            return self.state.get();
        };
        self.state.publish(next);
        tracing::debug!(state = ?next, "session probed");

        if next.is_authenticated() {
            self.schedule_redirect();
        }
        next
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    #[must_use]
    pub fn subscribe(&self) -> Subscription<SessionState> {
        self.state.subscribe()
    }

    /// Takes the handle of the pending redirect, if one was scheduled.
    ///
    /// The task resolves to `true` once the replace has been issued, or
    /// `false` if the navigator went away before mounting.
    pub fn take_redirect(&self) -> Option<JoinHandle<bool>> {
        self.redirect
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Writes the marker after a successful login.
    pub async fn sign_in(&self, payload: &str) -> Result<SessionState> {
        self.store
            .set(PreferenceKey::Session.as_str(), payload)
            .await?;
        if let Some(next) = self.state.get().sign_in() {
            self.state.publish(next);
            tracing::info!("signed in");
        }
        Ok(self.state.get())
    }

    /// Removes the marker on logout.
    pub async fn sign_out(&self) -> Result<SessionState> {
        self.store.remove(PreferenceKey::Session.as_str()).await?;
        if let Some(next) = self.state.get().sign_out() {
            self.state.publish(next);
            tracing::info!("signed out");
        }
        Ok(self.state.get())
    }

    fn schedule_redirect(&self) {
        let mut slot = self.redirect.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return;
        }

        // Weak, so a shell that never mounts can still be dropped.
        let navigator = Arc::downgrade(&self.navigator);
        let mounted = self.navigator.mounted();
        *slot = Some(tokio::spawn(async move {
            let mounted = mounted.wait().await;
            let Some(navigator) = navigator.upgrade().filter(|_| mounted) else {
                tracing::warn!("navigation shell dropped before mount, skipping redirect");
                return false;
            };
            let route = Route::main_tabs();
            tracing::info!(route = %route, "restoring session, skipping landing");
            navigator.replace(route);
            true
        }));
    }
}
