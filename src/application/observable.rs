// SPDX-License-Identifier: MPL-2.0
//! Single-writer observable values.
//!
//! Process-wide state such as the active language or color scheme lives in
//! an [`Observable`]: the owner publishes, any number of [`Subscription`]s
//! read the latest value or wait for the next change. Readers never hold a
//! snapshot longer than they want to; a new publish is visible to every
//! subscriber without restarting anything.

use tokio::sync::watch;

/// A value with one writer and many read-only subscribers.
///
/// Not `Clone`: handing out the observable would hand out the writer role.
/// Share reads through [`Observable::subscribe`].
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Publishes a value and wakes every subscriber, even if it equals the old one.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Publishes only when the value differs. Returns whether a publish happened.
    pub fn publish_if_changed(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    #[must_use]
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read-only view of an [`Observable`].
#[derive(Debug, Clone)]
pub struct Subscription<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// Returns the latest published value.
    #[must_use]
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Returns `true` if a value was published since this subscription last read one.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Waits for the next publish and returns the new value.
    ///
    /// Returns `None` once the observable has been dropped.
    pub async fn changed(&mut self) -> Option<T> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
