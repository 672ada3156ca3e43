// SPDX-License-Identifier: MPL-2.0
//! In-process navigation shell.
//!
//! A route stack standing in for the platform router: the landing screen at
//! the root, the main tab set above it once the user is in. The shell
//! records every action it performs so the launcher can report it and tests
//! can assert on it.
//!
//! The shell exposes an explicit mount signal. Anything that wants to
//! navigate during startup waits on [`Navigator::mounted`] instead of
//! guessing when the tree exists.

use crate::application::port::{MountSignal, Navigator};
use crate::domain::navigation::{Route, Tab};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// A navigation action as performed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    Push(Route),
    Replace(Route),
    Back,
}

#[derive(Debug, Default)]
struct ShellState {
    stack: Vec<Route>,
    actions: Vec<NavigationAction>,
}

/// Route stack with a mount signal.
#[derive(Debug)]
pub struct NavigationShell {
    state: Mutex<ShellState>,
    mounted: watch::Sender<bool>,
}

impl Default for NavigationShell {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationShell {
    /// Creates an unmounted shell showing the landing screen.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(Route::landing())
    }

    #[must_use]
    pub fn with_root(root: Route) -> Self {
        let (mounted, _rx) = watch::channel(false);
        Self {
            state: Mutex::new(ShellState {
                stack: vec![root],
                actions: Vec::new(),
            }),
            mounted,
        }
    }

    /// Marks the navigation tree as mounted and releases anyone waiting on it.
    /// Later calls are no-ops.
    pub fn mark_mounted(&self) {
        let first = self.mounted.send_if_modified(|mounted| !std::mem::replace(mounted, true));
        if first {
            tracing::debug!(route = %self.current(), "navigation shell mounted");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        *self.mounted.borrow()
    }

    /// Pushes a route on top of the current one.
    pub fn push(&self, route: Route) {
        let mut state = self.lock();
        state.stack.push(route.clone());
        state.actions.push(NavigationAction::Push(route));
    }

    /// Opens a tab of the main set.
    pub fn open_tab(&self, tab: Tab) {
        self.push(tab.route());
    }

    /// Pops the top route. The root is never popped; returns whether anything moved.
    pub fn back(&self) -> bool {
        let mut state = self.lock();
        if state.stack.len() <= 1 {
            return false;
        }
        state.stack.pop();
        state.actions.push(NavigationAction::Back);
        true
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.lock().stack.len() > 1
    }

    /// The route currently on screen.
    #[must_use]
    pub fn current(&self) -> Route {
        self.lock()
            .stack
            .last()
            .cloned()
            .unwrap_or_else(Route::landing)
    }

    /// Every action performed so far, oldest first.
    #[must_use]
    pub fn actions(&self) -> Vec<NavigationAction> {
        self.lock().actions.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ShellState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for NavigationShell {
    fn replace(&self, route: Route) {
        let mut state = self.lock();
        state.stack.pop();
        state.stack.push(route.clone());
        state.actions.push(NavigationAction::Replace(route));
    }

    fn mounted(&self) -> MountSignal {
        MountSignal::new(self.mounted.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_shell_shows_landing() {
        let shell = NavigationShell::new();
        assert_eq!(shell.current(), Route::landing());
        assert!(!shell.is_mounted());
        assert!(shell.actions().is_empty());
    }

    #[test]
    fn replace_hides_the_previous_route_from_back() {
        let shell = NavigationShell::new();
        shell.replace(Route::main_tabs());

        assert_eq!(shell.current(), Route::main_tabs());
        assert!(!shell.back());
        assert_eq!(shell.current(), Route::main_tabs());
    }

    #[test]
    fn push_and_back_walk_the_stack() {
        let shell = NavigationShell::new();
        shell.replace(Route::main_tabs());
        shell.open_tab(Tab::Bookings);

        assert_eq!(shell.current(), Tab::Bookings.route());
        assert!(shell.back());
        assert_eq!(shell.current(), Route::main_tabs());
        assert_eq!(
            shell.actions(),
            vec![
                NavigationAction::Replace(Route::main_tabs()),
                NavigationAction::Push(Tab::Bookings.route()),
                NavigationAction::Back,
            ]
        );
    }

    #[tokio::test]
    async fn mount_signal_fires_once() {
        let shell = NavigationShell::new();
        let signal = shell.mounted();
        assert!(!signal.is_mounted());

        shell.mark_mounted();
        shell.mark_mounted();

        assert!(shell.is_mounted());
        assert!(signal.wait().await);
    }
}
