// SPDX-License-Identifier: MPL-2.0
use crate::domain::language::Language;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Fluent bundles for every supported language that ships a table.
///
/// Uses the concurrent bundle flavour so one translator can be shared by
/// every screen behind an `Arc`.
pub struct Translator {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut loaded: Vec<_> = self.bundles.keys().map(|lang| lang.code()).collect();
        loaded.sort_unstable();
        f.debug_struct("Translator").field("loaded", &loaded).finish()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Loads every embedded table. Tables for unsupported languages and
    /// unparsable entries are skipped with a warning.
    pub fn new() -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(code) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Some(language) = Language::from_code(code) else {
                tracing::warn!(file = filename, "skipping translation table for unsupported language");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            if let Some(bundle) = build_bundle(language, source) {
                bundles.insert(language, bundle);
            }
        }

        Self { bundles }
    }

    /// Returns `true` when a table was loaded for `language`.
    #[must_use]
    pub fn has_table(&self, language: Language) -> bool {
        self.bundles.contains_key(&language)
    }

    /// Translates `key` for `language`, falling back to the default language.
    ///
    /// Keys missing everywhere render as `MISSING: <key>` so gaps are visible
    /// on screen rather than blank.
    #[must_use]
    pub fn tr(&self, language: Language, key: &str) -> String {
        if let Some(value) = self.lookup(language, key) {
            return value;
        }
        if language != Language::DEFAULT {
            if let Some(value) = self.lookup(Language::DEFAULT, key) {
                return value;
            }
        }
        format!("MISSING: {}", key)
    }

    fn lookup(&self, language: Language, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }
}

fn build_bundle(language: Language, source: String) -> Option<FluentBundle<FluentResource>> {
    let langid: LanguageIdentifier = match language.code().parse() {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(language = %language, error = %err, "invalid language identifier");
            return None;
        }
    };

    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            // Keep the entries that did parse.
            tracing::warn!(language = %language, errors = errors.len(), "translation table has syntax errors");
            resource
        }
    };

    let mut bundle = FluentBundle::new_concurrent(vec![langid]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(language = %language, errors = errors.len(), "duplicate translation entries");
    }
    Some(bundle)
}
