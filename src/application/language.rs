// SPDX-License-Identifier: MPL-2.0
//! Language resolution and the process-wide translation provider.
//!
//! # Resolution Order
//!
//! 1. Stored `user-language` preference, if it names a supported language
//! 2. Primary subtag of the device's first preferred locale, if supported
//! 3. The configured default language
//!
//! A failed storage read counts as "no stored preference".

use super::observable::{Observable, Subscription};
use super::port::{DeviceLocaleSource, PreferenceStore};
use crate::domain::language::Language;
use crate::domain::preference::PreferenceKey;
use crate::error::{Error, Result};
use crate::i18n::Translator;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

/// Which step of the fallback chain produced the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    Stored,
    Device,
    Default,
}

/// A settled language and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageResolution {
    pub language: Language,
    pub source: LanguageSource,
}

/// Extracts the lowercase primary language subtag from a locale tag.
///
/// Accepts BCP 47 tags (`fr-FR`) and POSIX-style names (`de_DE.UTF-8`).
#[must_use]
pub fn primary_subtag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }
    if let Ok(id) = tag.parse::<LanguageIdentifier>() {
        return Some(id.language.as_str().to_ascii_lowercase());
    }
    tag.split(['-', '_', '.', '@'])
        .next()
        .filter(|subtag| !subtag.is_empty())
        .map(str::to_ascii_lowercase)
}

fn supported(tag: &str) -> Option<Language> {
    primary_subtag(tag).and_then(|code| Language::from_code(&code))
}

/// Runs the fallback chain over already-read inputs.
///
/// `device_locales` is only called when the stored value does not settle it.
pub fn resolve_language<F>(stored: Option<&str>, device_locales: F, default: Language) -> LanguageResolution
where
    F: FnOnce() -> Vec<String>,
{
    if let Some(language) = stored.and_then(supported) {
        return LanguageResolution {
            language,
            source: LanguageSource::Stored,
        };
    }

    if let Some(language) = device_locales().first().and_then(|tag| supported(tag)) {
        return LanguageResolution {
            language,
            source: LanguageSource::Device,
        };
    }

    LanguageResolution {
        language: default,
        source: LanguageSource::Default,
    }
}

/// Reads the stored preference and runs [`resolve_language`].
pub async fn resolve_from_store<S, D>(store: &S, device: &D, default: Language) -> LanguageResolution
where
    S: PreferenceStore + ?Sized,
    D: DeviceLocaleSource + ?Sized,
{
    let key = PreferenceKey::Language.as_str();
    let stored = match store.get(key).await {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "language preference unreadable, treating as absent");
            None
        }
    };

    resolve_language(stored.as_deref(), || device.preferred_locales(), default)
}

// =============================================================================
// TranslationProvider
// =============================================================================

/// Process-wide active language plus the tables to translate with.
///
/// Screens subscribe to the language and re-render on change. The only
/// writers are [`TranslationProvider::resolve`] at startup and
/// [`TranslationProvider::set_language`] when the user picks a language.
#[derive(Debug)]
pub struct TranslationProvider<S> {
    store: Arc<S>,
    translator: Arc<Translator>,
    language: Observable<Language>,
    default: Language,
}

impl<S: PreferenceStore> TranslationProvider<S> {
    /// Creates a provider publishing `default` until resolution settles.
    pub fn new(store: Arc<S>, translator: Arc<Translator>, default: Language) -> Self {
        Self {
            store,
            translator,
            language: Observable::new(default),
            default,
        }
    }

    /// Cold-start resolution. Publishes the result exactly once.
    pub async fn resolve<D>(&self, device: &D) -> LanguageResolution
    where
        D: DeviceLocaleSource + ?Sized,
    {
        let resolution = resolve_from_store(self.store.as_ref(), device, self.default).await;
        tracing::debug!(
            language = %resolution.language,
            source = ?resolution.source,
            "language resolved"
        );
        self.language.publish(resolution.language);
        resolution
    }

    #[must_use]
    pub fn resolved_language(&self) -> Language {
        self.language.get()
    }

    #[must_use]
    pub fn subscribe(&self) -> Subscription<Language> {
        self.language.subscribe()
    }

    /// Switches to `code`, persists it, and re-publishes to every subscriber.
    ///
    /// A failed write is logged; the switch still applies for this run.
    pub async fn set_language(&self, code: &str) -> Result<Language> {
        let language =
            supported(code).ok_or_else(|| Error::UnsupportedLanguage(code.trim().to_string()))?;

        let key = PreferenceKey::Language.as_str();
        if let Err(err) = self.store.set(key, language.code()).await {
            tracing::warn!(key, error = %err, "failed to persist language preference");
        }

        self.language.publish(language);
        tracing::info!(language = %language, "language changed");
        Ok(language)
    }

    /// Translates `key` in the active language.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.translator.tr(self.language.get(), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::MemoryPreferenceStore;

    fn device(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|tag| tag.to_string()).collect()
    }

    fn no_device() -> Vec<String> {
        Vec::new()
    }

    #[test]
    fn primary_subtag_handles_common_tag_shapes() {
        assert_eq!(primary_subtag("fr-FR").as_deref(), Some("fr"));
        assert_eq!(primary_subtag("HI").as_deref(), Some("hi"));
        assert_eq!(primary_subtag("de_DE.UTF-8").as_deref(), Some("de"));
        assert_eq!(primary_subtag("es@euro").as_deref(), Some("es"));
        assert_eq!(primary_subtag("   "), None);
    }

    #[test]
    fn stored_supported_language_wins() {
        for language in Language::ALL {
            let resolution =
                resolve_language(Some(language.code()), || device(&["es-ES"]), Language::DEFAULT);
            assert_eq!(resolution.language, language);
            assert_eq!(resolution.source, LanguageSource::Stored);
        }
    }

    #[test]
    fn stored_region_tag_is_reduced_to_its_language() {
        let resolution = resolve_language(Some("hi-IN"), no_device, Language::DEFAULT);
        assert_eq!(resolution.language, Language::Hindi);
    }

    #[test]
    fn device_is_not_queried_when_storage_settles_it() {
        let resolution = resolve_language(
            Some("de"),
            || panic!("device locales should not be read"),
            Language::DEFAULT,
        );
        assert_eq!(resolution.language, Language::German);
    }

    #[test]
    fn unsupported_stored_value_falls_through_to_device() {
        let resolution = resolve_language(Some("fr"), || device(&["es-MX"]), Language::DEFAULT);
        assert_eq!(resolution.language, Language::Spanish);
        assert_eq!(resolution.source, LanguageSource::Device);
    }

    #[test]
    fn only_the_first_device_locale_is_considered() {
        let resolution = resolve_language(None, || device(&["fr-FR", "en-US"]), Language::Hindi);
        assert_eq!(resolution.language, Language::Hindi);
        assert_eq!(resolution.source, LanguageSource::Default);
    }

    #[test]
    fn empty_device_list_uses_default() {
        let resolution = resolve_language(None, no_device, Language::DEFAULT);
        assert_eq!(resolution.language, Language::English);
        assert_eq!(resolution.source, LanguageSource::Default);
    }

    #[tokio::test]
    async fn read_failure_falls_through_to_device() {
        let store = MemoryPreferenceStore::new();
        store.set_sync(PreferenceKey::Language, "hi");
        store.fail_reads(true);

        let resolution = resolve_from_store(&store, &device(&["de-AT"]), Language::DEFAULT).await;
        assert_eq!(resolution.language, Language::German);
        assert_eq!(resolution.source, LanguageSource::Device);
    }

    #[tokio::test]
    async fn resolve_publishes_to_subscribers() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set_sync(PreferenceKey::Language, "es");
        let provider =
            TranslationProvider::new(store, Arc::new(Translator::new()), Language::DEFAULT);
        let mut sub = provider.subscribe();

        provider.resolve(&no_device()).await;

        assert_eq!(sub.changed().await, Some(Language::Spanish));
        assert_eq!(provider.tr("tab-profile"), "Perfil");
    }

    #[tokio::test]
    async fn set_language_persists_and_republishes() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let provider = TranslationProvider::new(
            Arc::clone(&store),
            Arc::new(Translator::new()),
            Language::DEFAULT,
        );
        provider.resolve(&no_device()).await;
        let mut sub = provider.subscribe();

        let language = provider.set_language("hi").await.expect("hi is supported");

        assert_eq!(language, Language::Hindi);
        assert_eq!(sub.changed().await, Some(Language::Hindi));
        assert_eq!(store.get_sync(PreferenceKey::Language).as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn set_language_rejects_unsupported_codes() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let provider =
            TranslationProvider::new(store, Arc::new(Translator::new()), Language::DEFAULT);

        let err = provider.set_language("fr").await.unwrap_err();

        assert_eq!(err, Error::UnsupportedLanguage("fr".to_string()));
        assert_eq!(provider.resolved_language(), Language::English);
    }

    #[tokio::test]
    async fn set_language_still_applies_when_the_write_fails() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.fail_writes(true);
        let provider = TranslationProvider::new(
            Arc::clone(&store),
            Arc::new(Translator::new()),
            Language::DEFAULT,
        );

        provider.set_language("de").await.expect("de is supported");

        assert_eq!(provider.resolved_language(), Language::German);
        assert_eq!(store.get_sync(PreferenceKey::Language), None);
    }
}
