// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between bootstrap, navigation
//! and user-driven preference changes.
//!
//! The `App` struct wires together the preference store, the navigation
//! shell and the bootstrap providers, and translates [`Message`]s into
//! provider calls. Launch policy (what mounts when, which device signals are
//! followed) lives here so it is easy to audit.

pub mod config;
pub mod logging;
mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::application::appearance::follow_system;
use crate::application::bootstrap::{Bootstrap, BootstrapOptions, BootstrapReport};
use crate::application::port::PreferenceStore;
use crate::domain::appearance::ColorScheme;
use crate::domain::navigation::{Route, Tab};
use crate::domain::session::SessionState;
use crate::error::Result;
use crate::i18n::Translator;
use crate::infrastructure::{DarkLightAppearance, SysLocales};
use crate::navigation::NavigationShell;
use config::Config;
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Root application state.
pub struct App<S> {
    config: Config,
    shell: Arc<NavigationShell>,
    bootstrap: Bootstrap<S, SysLocales, NavigationShell>,
    system_follower: Option<JoinHandle<()>>,
}

impl<S> fmt::Debug for App<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.shell.current())
            .field("following_system", &self.system_follower.is_some())
            .finish()
    }
}

impl<S: PreferenceStore + 'static> App<S> {
    /// `initial_system_scheme` is the device light/dark setting at launch;
    /// the launcher reads it before the runtime starts.
    pub fn new(config: Config, store: Arc<S>, initial_system_scheme: ColorScheme) -> Self {
        let shell = Arc::new(NavigationShell::new());
        let options = BootstrapOptions {
            default_language: config.default_language(),
            initial_system_scheme,
        };
        let bootstrap = Bootstrap::new(
            store,
            SysLocales,
            Arc::clone(&shell),
            Arc::new(Translator::new()),
            options,
        );

        Self {
            config,
            shell,
            bootstrap,
            system_follower: None,
        }
    }

    /// Cold start.
    ///
    /// Mounts the navigation shell (first paint) alongside bootstrap rather
    /// than after it, then starts following the device light/dark setting.
    /// Returns once bootstrap has settled and any session redirect has run.
    pub async fn launch(&mut self) -> BootstrapReport {
        let shell = Arc::clone(&self.shell);
        let (report, ()) = tokio::join!(self.bootstrap.run(), async move {
            shell.mark_mounted();
        });

        if self.system_follower.is_none() {
            self.system_follower = Some(follow_system(
                Arc::clone(self.bootstrap.appearance()),
                DarkLightAppearance,
                self.config.system_poll_interval(),
            ));
        }

        if let Some(redirect) = self.bootstrap.session().take_redirect() {
            if let Err(err) = redirect.await {
                tracing::error!(error = %err, "session redirect task failed");
            }
        }

        report
    }

    /// Applies one user-driven change.
    pub async fn update(&self, message: Message) -> Result<()> {
        match message {
            Message::SetLanguage(code) => {
                self.bootstrap.language().set_language(&code).await?;
            }
            Message::SetTheme(mode) => {
                self.bootstrap.appearance().set_mode(mode).await;
            }
            Message::SignIn(payload) => {
                self.bootstrap.session().sign_in(&payload).await?;
            }
            Message::SignOut => {
                self.bootstrap.session().sign_out().await?;
            }
            Message::OpenTab(tab) => {
                if self.current_route().is_within_main_tabs() {
                    self.shell.open_tab(tab);
                } else {
                    tracing::warn!(tab = ?tab, "main tabs are not showing, ignoring");
                }
            }
            Message::Back => {
                self.shell.back();
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn report(&self) -> BootstrapReport {
        self.bootstrap.report()
    }

    #[must_use]
    pub fn session(&self) -> SessionState {
        self.bootstrap.session().state()
    }

    #[must_use]
    pub fn current_route(&self) -> Route {
        self.shell.current()
    }

    /// Translates `key` in the active language.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.bootstrap.language().tr(key)
    }

    /// Tab bar labels in the active language, in bar order.
    #[must_use]
    pub fn tab_labels(&self) -> Vec<(Tab, String)> {
        Tab::ALL
            .into_iter()
            .map(|tab| (tab, self.tr(tab.label_key())))
            .collect()
    }

    #[must_use]
    pub fn shell(&self) -> &Arc<NavigationShell> {
        &self.shell
    }
}

impl<S> Drop for App<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.system_follower.take() {
            handle.abort();
        }
    }
}
