//! Translation store
//!
//! Holds one table per supported language. Loading is all-or-nothing: the
//! first language that fails aborts construction, so a store always has a
//! table for every supported language.

use std::collections::HashMap;

use tracing::{error, info, instrument};
use unic_langid::LanguageIdentifier;

use super::language::SupportedLanguages;
use super::loader::{JsonFileLoader, TranslationLoader, TranslationTable};
use crate::utils::errors::Result;
use crate::utils::logging::log_table_loaded;

/// Immutable collection of translation tables
#[derive(Debug)]
pub struct TranslationStore {
    supported: SupportedLanguages,
    tables: HashMap<LanguageIdentifier, TranslationTable>,
}

impl TranslationStore {
    /// Load a table for every supported language
    #[instrument(skip_all, fields(languages = %supported))]
    pub fn load(loader: &dyn TranslationLoader, supported: SupportedLanguages) -> Result<Self> {
        let mut tables = HashMap::with_capacity(supported.len());

        for language in &supported {
            let table = loader.load_table(language).map_err(|e| {
                error!("Failed to load translations for {}: {}", language, e);
                e
            })?;
            log_table_loaded(language, table.len());
            tables.insert(language.clone(), table);
        }

        info!("Loaded translations for {} language(s): {}", supported.len(), supported);
        Ok(Self { supported, tables })
    }

    /// Load every supported language's file without blocking the runtime
    #[instrument(skip_all, fields(languages = %supported))]
    pub async fn load_async(loader: &JsonFileLoader, supported: SupportedLanguages) -> Result<Self> {
        let mut tables = HashMap::with_capacity(supported.len());

        for language in &supported {
            let table = loader.load_table_async(language).await.map_err(|e| {
                error!("Failed to load translations for {}: {}", language, e);
                e
            })?;
            log_table_loaded(language, table.len());
            tables.insert(language.clone(), table);
        }

        info!("Loaded translations for {} language(s): {}", supported.len(), supported);
        Ok(Self { supported, tables })
    }

    pub fn supported(&self) -> &SupportedLanguages {
        &self.supported
    }

    /// Table for a supported language, `None` for anything else
    pub fn table(&self, language: &LanguageIdentifier) -> Option<&TranslationTable> {
        self.tables.get(language)
    }

    /// Translation for `key` in `language`
    pub fn get(&self, language: &LanguageIdentifier, key: &str) -> Option<&str> {
        self.table(language)?.get(key).map(String::as_str)
    }
}
