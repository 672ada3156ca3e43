// SPDX-License-Identifier: MPL-2.0
//! Route identifiers and the main tab set.
//!
//! Routes are opaque strings owned by the router; the bootstrap core only
//! ever names the landing screen and the main tab set.

use std::borrow::Cow;
use std::fmt;

/// An opaque route identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(Cow<'static, str>);

impl Route {
    const LANDING: &'static str = "/";
    const MAIN_TABS: &'static str = "/(tabs)";

    #[must_use]
    pub fn new(path: impl Into<Cow<'static, str>>) -> Self {
        Self(path.into())
    }

    /// The first screen shown to users without a session.
    #[must_use]
    pub fn landing() -> Self {
        Self(Cow::Borrowed(Self::LANDING))
    }

    /// The main tab set; opens on [`Tab::Discover`].
    #[must_use]
    pub fn main_tabs() -> Self {
        Self(Cow::Borrowed(Self::MAIN_TABS))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the tab set root and any route inside it.
    #[must_use]
    pub fn is_within_main_tabs(&self) -> bool {
        self.0 == Self::MAIN_TABS || self.0.starts_with("/(tabs)/")
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tabs of the main set, in bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Discover,
    Wishlist,
    Cart,
    Bookings,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Discover,
        Tab::Wishlist,
        Tab::Cart,
        Tab::Bookings,
        Tab::Profile,
    ];

    #[must_use]
    pub fn route(self) -> Route {
        let path = match self {
            Tab::Discover => "/(tabs)/discover",
            Tab::Wishlist => "/(tabs)/wishlist",
            Tab::Cart => "/(tabs)/cart",
            Tab::Bookings => "/(tabs)/bookings",
            Tab::Profile => "/(tabs)/profile",
        };
        Route::new(path)
    }

    /// Translation key for the tab bar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Discover => "tab-discover",
            Tab::Wishlist => "tab-wishlist",
            Tab::Cart => "tab-cart",
            Tab::Bookings => "tab-bookings",
            Tab::Profile => "tab-profile",
        }
    }
}
