//! Translator handles
//!
//! A [`Translator`] is a cheap handle: the store and matcher live behind an
//! `Arc` and are shared by every handle derived from the same construction,
//! while the current language is a per-handle value.
//!
//! `select_language*` return a new handle and leave the receiver untouched,
//! so one base translator can be shared across threads and specialized per
//! request without locking. `set_language*` update an exclusively borrowed
//! handle in place.

use std::sync::Arc;

use tracing::error;
use unic_langid::LanguageIdentifier;

use super::language::SupportedLanguages;
use super::loader::{JsonFileLoader, TranslationLoader, TranslationTable};
use super::matcher::LanguageMatcher;
use super::params::{format_message, TranslationParams};
use super::store::TranslationStore;
use crate::config::I18nConfig;
use crate::utils::errors::Result;
use crate::utils::logging::log_language_selection;

#[derive(Debug)]
struct Shared {
    store: TranslationStore,
    matcher: LanguageMatcher,
}

/// Translation lookups for one current language
#[derive(Debug, Clone)]
pub struct Translator {
    shared: Arc<Shared>,
    current: LanguageIdentifier,
}

impl Translator {
    /// Load `<base_path><language>.json` for every supported language.
    ///
    /// The first language becomes the default and the initial current language.
    pub fn create(base_path: &str, supported: Vec<LanguageIdentifier>) -> Result<Self> {
        let supported = SupportedLanguages::new(supported)?;
        Self::with_loader(&JsonFileLoader::new(base_path), supported)
    }

    /// Like [`Translator::create`], but panics if any table fails to load.
    ///
    /// For call sites where missing translations are a startup-fatal condition.
    pub fn create_or_abort(base_path: &str, supported: Vec<LanguageIdentifier>) -> Self {
        match Self::create(base_path, supported) {
            Ok(translator) => translator,
            Err(e) => {
                error!("Unable to load translations from {}: {}", base_path, e);
                panic!("unable to load translations from {base_path}: {e}");
            }
        }
    }

    /// Async variant of [`Translator::create`]
    pub async fn create_async(base_path: &str, supported: Vec<LanguageIdentifier>) -> Result<Self> {
        let supported = SupportedLanguages::new(supported)?;
        let store = TranslationStore::load_async(&JsonFileLoader::new(base_path), supported).await?;
        Ok(Self::from_store(store))
    }

    /// Build from configuration
    pub fn from_config(config: &I18nConfig) -> Result<Self> {
        let supported = SupportedLanguages::parse(&config.supported_languages)?;
        let loader = JsonFileLoader::with_extension(&config.translations_path, &config.file_extension);
        Self::with_loader(&loader, supported)
    }

    /// Build from any table source
    pub fn with_loader(loader: &dyn TranslationLoader, supported: SupportedLanguages) -> Result<Self> {
        let store = TranslationStore::load(loader, supported)?;
        Ok(Self::from_store(store))
    }

    fn from_store(store: TranslationStore) -> Self {
        let matcher = LanguageMatcher::new(store.supported().clone());
        let current = matcher.default_language().clone();
        Self {
            shared: Arc::new(Shared { store, matcher }),
            current,
        }
    }

    /// New handle for the best match of `code`; `self` is unchanged.
    ///
    /// `code` is a single tag or a weighted preference list, as accepted by
    /// [`Translator::select_language_from_header`].
    pub fn select_language(&self, code: &str) -> Translator {
        let language = self.shared.matcher.match_code(code).clone();
        log_language_selection(code, &language, "code");
        self.with_current(language)
    }

    /// New handle for the best match of a weighted preference header; `self` is unchanged
    pub fn select_language_from_header(&self, header: &str) -> Translator {
        let language = self.shared.matcher.match_header(header).clone();
        log_language_selection(header, &language, "header");
        self.with_current(language)
    }

    /// Switch this handle to the best match of `code`
    pub fn set_language(&mut self, code: &str) -> &LanguageIdentifier {
        *self = self.select_language(code);
        &self.current
    }

    /// Switch this handle to the best match of a weighted preference header
    pub fn set_language_from_header(&mut self, header: &str) -> &LanguageIdentifier {
        *self = self.select_language_from_header(header);
        &self.current
    }

    fn with_current(&self, current: LanguageIdentifier) -> Translator {
        Translator {
            shared: Arc::clone(&self.shared),
            current,
        }
    }

    pub fn current_language(&self) -> &LanguageIdentifier {
        &self.current
    }

    pub fn default_language(&self) -> &LanguageIdentifier {
        self.shared.matcher.default_language()
    }

    pub fn supported_languages(&self) -> &SupportedLanguages {
        self.shared.store.supported()
    }

    /// Translation for `key`, or an empty string when the key is missing
    pub fn translation(&self, key: &str) -> String {
        self.shared
            .store
            .get(&self.current, key)
            .unwrap_or_default()
            .to_string()
    }

    pub fn has_translation(&self, key: &str) -> bool {
        self.shared.store.get(&self.current, key).is_some()
    }

    /// Every translation for the current language
    pub fn translations(&self) -> &TranslationTable {
        // current is always a supported language, and the store has a table for each
        self.shared
            .store
            .table(&self.current)
            .unwrap_or_else(|| unreachable!("no table for supported language {}", self.current))
    }

    /// Translation for `key` with `{name}` placeholders replaced from `params`
    pub fn parametrized_translation(&self, key: &str, params: &TranslationParams) -> String {
        let template = self.shared.store.get(&self.current, key).unwrap_or_default();
        format_message(template, params).into_owned()
    }

    /// True when both handles share the same loaded tables
    pub fn shares_store_with(&self, other: &Translator) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}
