// SPDX-License-Identifier: MPL-2.0
//! Navigation shell port.
//!
//! The session probe only needs two things from the router: a way to
//! replace the current route, and a signal telling it the navigation tree
//! has mounted so the replace does not race the router's own setup.

use crate::domain::navigation::Route;
use tokio::sync::watch;

/// Minimal router surface used by the bootstrap core.
pub trait Navigator: Send + Sync {
    /// Replaces the current route; the replaced route is not reachable with back-navigation.
    fn replace(&self, route: Route);

    /// Returns a signal that completes once the navigation tree has mounted.
    fn mounted(&self) -> MountSignal;
}

/// Completes once the navigation tree has mounted.
#[derive(Debug, Clone)]
pub struct MountSignal {
    rx: watch::Receiver<bool>,
}

impl MountSignal {
    #[must_use]
    pub fn new(rx: watch::Receiver<bool>) -> Self {
        Self { rx }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        *self.rx.borrow()
    }

    /// Waits for the mount. Returns `false` if the shell was dropped before mounting.
    pub async fn wait(mut self) -> bool {
        self.rx.wait_for(|mounted| *mounted).await.is_ok()
    }
}
