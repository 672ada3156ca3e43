// SPDX-License-Identifier: MPL-2.0
//! Appearance resolution and the live color scheme.
//!
//! The stored `user-theme` value picks the [`ThemeMode`]; anything missing,
//! unreadable or invalid falls back to `System`. The effective
//! [`ColorScheme`] is published separately so screens can follow device
//! light/dark changes while the mode is `System`.

use super::observable::{Observable, Subscription};
use super::port::{PreferenceStore, SystemAppearanceSource};
use crate::domain::appearance::{ColorScheme, ThemeMode};
use crate::domain::preference::PreferenceKey;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default interval between device light/dark polls.
pub const DEFAULT_SYSTEM_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Maps a stored value to a mode; absent or invalid values become `System`.
#[must_use]
pub fn resolve_theme_mode(stored: Option<&str>) -> ThemeMode {
    stored.and_then(ThemeMode::parse).unwrap_or(ThemeMode::System)
}

/// Reads the stored preference and runs [`resolve_theme_mode`].
pub async fn resolve_from_store<S>(store: &S) -> ThemeMode
where
    S: PreferenceStore + ?Sized,
{
    let key = PreferenceKey::Theme.as_str();
    match store.get(key).await {
        Ok(stored) => {
            let mode = resolve_theme_mode(stored.as_deref());
            if let Some(raw) = stored.as_deref().filter(|raw| ThemeMode::parse(raw).is_none()) {
                tracing::warn!(key, value = raw, "ignoring invalid theme preference");
            }
            mode
        }
        Err(err) => {
            tracing::warn!(key, error = %err, "theme preference unreadable, treating as absent");
            ThemeMode::System
        }
    }
}

// =============================================================================
// AppearanceController
// =============================================================================

/// Process-wide appearance state.
///
/// Holds the user's mode and the last device signal; the effective scheme
/// is derived from both and re-published whenever either changes.
#[derive(Debug)]
pub struct AppearanceController<S> {
    store: Arc<S>,
    mode: Observable<ThemeMode>,
    system: Observable<ColorScheme>,
    scheme: Observable<ColorScheme>,
}

impl<S: PreferenceStore> AppearanceController<S> {
    /// Creates a controller in `System` mode following `initial_system`.
    pub fn new(store: Arc<S>, initial_system: ColorScheme) -> Self {
        Self {
            store,
            mode: Observable::new(ThemeMode::System),
            system: Observable::new(initial_system),
            scheme: Observable::new(ThemeMode::System.effective(initial_system)),
        }
    }

    /// Cold-start resolution. Publishes the mode exactly once and applies it.
    pub async fn resolve(&self) -> ThemeMode {
        let mode = resolve_from_store(self.store.as_ref()).await;
        tracing::debug!(mode = %mode, "appearance resolved");
        self.apply(mode);
        mode
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    /// The scheme screens should paint with right now.
    #[must_use]
    pub fn scheme(&self) -> ColorScheme {
        self.scheme.get()
    }

    #[must_use]
    pub fn subscribe_mode(&self) -> Subscription<ThemeMode> {
        self.mode.subscribe()
    }

    #[must_use]
    pub fn subscribe_scheme(&self) -> Subscription<ColorScheme> {
        self.scheme.subscribe()
    }

    /// Applies a user-chosen mode immediately and persists it.
    ///
    /// A failed write is logged; the mode still applies for this run.
    pub async fn set_mode(&self, mode: ThemeMode) {
        self.apply(mode);

        let key = PreferenceKey::Theme.as_str();
        if let Err(err) = self.store.set(key, mode.as_str()).await {
            tracing::warn!(key, error = %err, "failed to persist theme preference");
        }
        tracing::info!(mode = %mode, "theme mode changed");
    }

    /// Records a device light/dark change.
    ///
    /// The effective scheme only moves while the mode is `System`.
    pub fn apply_system_scheme(&self, system: ColorScheme) {
        if self.system.publish_if_changed(system) {
            let changed = self
                .scheme
                .publish_if_changed(self.mode.get().effective(system));
            if changed {
                tracing::debug!(scheme = %system, "following device appearance");
            }
        }
    }

    fn apply(&self, mode: ThemeMode) {
        self.mode.publish(mode);
        self.scheme.publish_if_changed(mode.effective(self.system.get()));
    }
}

/// Polls `source` every `interval` and feeds changes to `controller`.
///
/// Device queries may block on platform IPC, so each one runs on the
/// blocking pool. Runs for the process lifetime; abort the returned handle
/// to stop it.
pub fn follow_system<S, A>(
    controller: Arc<AppearanceController<S>>,
    source: A,
    interval: Duration,
) -> JoinHandle<()>
where
    S: PreferenceStore + 'static,
    A: SystemAppearanceSource + 'static,
{
    let source = Arc::new(source);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let query = Arc::clone(&source);
            match tokio::task::spawn_blocking(move || query.current_scheme()).await {
                Ok(scheme) => controller.apply_system_scheme(scheme.unwrap_or_default()),
                Err(err) => tracing::warn!(error = %err, "system appearance query failed"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::MemoryPreferenceStore;
    use std::sync::Mutex;

    struct ManualAppearance(Mutex<Option<ColorScheme>>);

    impl ManualAppearance {
        fn set(&self, scheme: Option<ColorScheme>) {
            *self.0.lock().unwrap() = scheme;
        }
    }

    impl SystemAppearanceSource for Arc<ManualAppearance> {
        fn current_scheme(&self) -> Option<ColorScheme> {
            *self.0.lock().unwrap()
        }
    }

    #[test]
    fn supported_values_resolve_to_themselves() {
        for mode in ThemeMode::ALL {
            assert_eq!(resolve_theme_mode(Some(mode.as_str())), mode);
        }
    }

    #[test]
    fn absent_or_invalid_values_resolve_to_system() {
        assert_eq!(resolve_theme_mode(None), ThemeMode::System);
        assert_eq!(resolve_theme_mode(Some("")), ThemeMode::System);
        assert_eq!(resolve_theme_mode(Some("midnight")), ThemeMode::System);
    }

    #[tokio::test]
    async fn read_failure_resolves_to_system() {
        let store = MemoryPreferenceStore::new();
        store.set_sync(PreferenceKey::Theme, "dark");
        store.fail_reads(true);

        assert_eq!(resolve_from_store(&store).await, ThemeMode::System);
    }

    #[tokio::test]
    async fn resolve_applies_the_stored_mode() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set_sync(PreferenceKey::Theme, "dark");
        let controller = AppearanceController::new(store, ColorScheme::Light);

        assert_eq!(controller.resolve().await, ThemeMode::Dark);
        assert_eq!(controller.scheme(), ColorScheme::Dark);
    }

    #[tokio::test]
    async fn set_mode_persists_and_publishes() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let controller = AppearanceController::new(Arc::clone(&store), ColorScheme::Light);
        controller.resolve().await;
        let mut schemes = controller.subscribe_scheme();

        controller.set_mode(ThemeMode::Dark).await;

        assert_eq!(schemes.changed().await, Some(ColorScheme::Dark));
        assert_eq!(controller.mode(), ThemeMode::Dark);
        assert_eq!(store.get_sync(PreferenceKey::Theme).as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn resolve_does_not_write_to_storage() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let controller = AppearanceController::new(Arc::clone(&store), ColorScheme::Light);

        controller.resolve().await;

        assert_eq!(store.get_sync(PreferenceKey::Theme), None);
    }

    #[test]
    fn system_changes_only_move_the_scheme_in_system_mode() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let controller = AppearanceController::new(store, ColorScheme::Light);

        controller.apply_system_scheme(ColorScheme::Dark);
        assert_eq!(controller.scheme(), ColorScheme::Dark);

        controller.apply(ThemeMode::Light);
        controller.apply_system_scheme(ColorScheme::Light);
        controller.apply_system_scheme(ColorScheme::Dark);
        assert_eq!(controller.scheme(), ColorScheme::Light);

        // Switching back to System picks up the latest device signal.
        controller.apply(ThemeMode::System);
        assert_eq!(controller.scheme(), ColorScheme::Dark);
    }

    #[tokio::test(start_paused = true)]
    async fn follow_system_tracks_device_changes() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let controller = Arc::new(AppearanceController::new(store, ColorScheme::Light));
        let device = Arc::new(ManualAppearance(Mutex::new(Some(ColorScheme::Light))));

        let handle = follow_system(
            Arc::clone(&controller),
            Arc::clone(&device),
            Duration::from_millis(100),
        );

        device.set(Some(ColorScheme::Dark));
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(controller.scheme(), ColorScheme::Dark);

        // An unreporting device reads as light.
        device.set(None);
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(controller.scheme(), ColorScheme::Light);

        handle.abort();
    }
}
