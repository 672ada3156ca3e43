// SPDX-License-Identifier: MPL-2.0
//! Cold-start orchestration.
//!
//! ```text
//! Idle ──run()──▶ Resolving ──all three settled──▶ Settled
//! ```
//!
//! `run()` launches the language resolver, the appearance resolver and the
//! session probe together and lets each publish as soon as it settles.
//! First paint does not wait for any of them: screens render with the
//! defaults and re-render from their subscriptions. `Settled` is terminal;
//! later language or appearance changes go through the providers directly.

use super::appearance::AppearanceController;
use super::language::{LanguageResolution, TranslationProvider};
use super::observable::{Observable, Subscription};
use super::port::{DeviceLocaleSource, Navigator, PreferenceStore};
use super::session::SessionProbe;
use crate::domain::appearance::{ColorScheme, ThemeMode};
use crate::domain::language::Language;
use crate::domain::session::SessionState;
use crate::i18n::Translator;
use std::sync::Arc;

/// Orchestrator lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootstrapPhase {
    #[default]
    Idle,
    Resolving,
    Settled,
}

/// What the three resolvers settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    pub language: Language,
    pub theme_mode: ThemeMode,
    pub scheme: ColorScheme,
    pub session: SessionState,
}

/// Startup inputs that are not shared services.
#[derive(Debug, Clone, Copy)]
pub struct BootstrapOptions {
    /// Used when neither storage nor the device names a supported language.
    pub default_language: Language,
    /// Device light/dark signal at launch.
    pub initial_system_scheme: ColorScheme,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            default_language: Language::DEFAULT,
            initial_system_scheme: ColorScheme::default(),
        }
    }
}

/// Owns the process-wide providers and runs the cold-start resolvers.
#[derive(Debug)]
pub struct Bootstrap<S, D, N> {
    language: Arc<TranslationProvider<S>>,
    appearance: Arc<AppearanceController<S>>,
    session: Arc<SessionProbe<S, N>>,
    device_locales: D,
    phase: Observable<BootstrapPhase>,
}

impl<S, D, N> Bootstrap<S, D, N>
where
    S: PreferenceStore,
    D: DeviceLocaleSource,
    N: Navigator + 'static,
{
    pub fn new(
        store: Arc<S>,
        device_locales: D,
        navigator: Arc<N>,
        translator: Arc<Translator>,
        options: BootstrapOptions,
    ) -> Self {
        Self {
            language: Arc::new(TranslationProvider::new(
                Arc::clone(&store),
                translator,
                options.default_language,
            )),
            appearance: Arc::new(AppearanceController::new(
                Arc::clone(&store),
                options.initial_system_scheme,
            )),
            session: Arc::new(SessionProbe::new(store, navigator)),
            device_locales,
            phase: Observable::new(BootstrapPhase::Idle),
        }
    }

    /// Runs the three resolvers concurrently and waits for all of them.
    ///
    /// Only the first call reads storage; later calls log and return the
    /// current values.
    pub async fn run(&self) -> BootstrapReport {
        if self.phase.get() != BootstrapPhase::Idle {
            tracing::warn!(phase = ?self.phase.get(), "bootstrap already started");
            return self.report();
        }

        self.phase.publish(BootstrapPhase::Resolving);
        tracing::info!("bootstrap resolving");

        let (language, theme_mode, session): (LanguageResolution, ThemeMode, SessionState) = tokio::join!(
            self.language.resolve(&self.device_locales),
            self.appearance.resolve(),
            self.session.probe(),
        );

        self.phase.publish(BootstrapPhase::Settled);
        let report = BootstrapReport {
            language: language.language,
            theme_mode,
            scheme: self.appearance.scheme(),
            session,
        };
        tracing::info!(
            language = %report.language,
            theme = %report.theme_mode,
            session = ?report.session,
            "bootstrap settled"
        );
        report
    }

    #[must_use]
    pub fn phase(&self) -> BootstrapPhase {
        self.phase.get()
    }

    #[must_use]
    pub fn subscribe_phase(&self) -> Subscription<BootstrapPhase> {
        self.phase.subscribe()
    }

    /// Current values, whether or not resolution has settled.
    #[must_use]
    pub fn report(&self) -> BootstrapReport {
        BootstrapReport {
            language: self.language.resolved_language(),
            theme_mode: self.appearance.mode(),
            scheme: self.appearance.scheme(),
            session: self.session.state(),
        }
    }

    #[must_use]
    pub fn language(&self) -> &Arc<TranslationProvider<S>> {
        &self.language
    }

    #[must_use]
    pub fn appearance(&self) -> &Arc<AppearanceController<S>> {
        &self.appearance
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionProbe<S, N>> {
        &self.session
    }
}
