// SPDX-License-Identifier: MPL-2.0
//! Application layer - Resolvers, providers and startup orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`observable`]: single-writer values with many read-only subscribers
//! - [`language`]: language resolution and the [`TranslationProvider`](language::TranslationProvider)
//! - [`appearance`]: theme resolution and the [`AppearanceController`](appearance::AppearanceController)
//! - [`session`]: the cold-start [`SessionProbe`](session::SessionProbe)
//! - [`bootstrap`]: the [`Bootstrap`](bootstrap::Bootstrap) orchestrator
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The launcher and navigation shell use application layer services
//!
//! # Example
//!
//! ```ignore
//! use roamly::application::bootstrap::{Bootstrap, BootstrapOptions};
//!
//! let bootstrap = Bootstrap::new(store, SysLocales, shell, translator, BootstrapOptions::default());
//! let report = bootstrap.run().await;
//! ```

pub mod appearance;
pub mod bootstrap;
pub mod language;
pub mod observable;
pub mod port;
pub mod session;
