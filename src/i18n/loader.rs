//! Translation table loading
//!
//! A table source is located by appending the language code and a file
//! extension to a base path, so `"locales/"` + `lt` + `".json"` reads
//! `locales/lt.json`. Content must be a flat JSON object of string values.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use unic_langid::LanguageIdentifier;

use crate::utils::errors::{LangTableError, Result};

/// Flat key to translation mapping for a single language
pub type TranslationTable = HashMap<String, String>;

/// Default translation file extension
pub const DEFAULT_EXTENSION: &str = ".json";

/// Source of per-language translation tables
pub trait TranslationLoader {
    fn load_table(&self, language: &LanguageIdentifier) -> Result<TranslationTable>;
}

/// Loads `<base_path><language><extension>` JSON files
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    base_path: String,
    extension: String,
}

impl JsonFileLoader {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self::with_extension(base_path, DEFAULT_EXTENSION)
    }

    pub fn with_extension(base_path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            extension: extension.into(),
        }
    }

    /// Path of the source file for `language`
    pub fn source_path(&self, language: &LanguageIdentifier) -> PathBuf {
        PathBuf::from(format!("{}{}{}", self.base_path, language, self.extension))
    }

    /// Async counterpart of [`TranslationLoader::load_table`]
    pub async fn load_table_async(&self, language: &LanguageIdentifier) -> Result<TranslationTable> {
        let path = self.source_path(language);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LangTableError::SourceUnavailable {
                language: language.clone(),
                path: path.clone(),
                source,
            })?;

        parse_table(language, &path, &content)
    }
}

impl TranslationLoader for JsonFileLoader {
    fn load_table(&self, language: &LanguageIdentifier) -> Result<TranslationTable> {
        let path = self.source_path(language);
        let content = std::fs::read_to_string(&path).map_err(|source| {
            LangTableError::SourceUnavailable {
                language: language.clone(),
                path: path.clone(),
                source,
            }
        })?;

        parse_table(language, &path, &content)
    }
}

/// Parse a flat JSON object; nested objects, arrays and non-string values are rejected
pub fn parse_table(language: &LanguageIdentifier, path: &Path, content: &str) -> Result<TranslationTable> {
    let table: TranslationTable = serde_json::from_str(content).map_err(|source| {
        LangTableError::MalformedData {
            language: language.clone(),
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!("Parsed {} translation keys for {} from {}", table.len(), language, path.display());
    Ok(table)
}

/// In-memory tables, mainly for tests and embedded translations
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    tables: HashMap<LanguageIdentifier, TranslationTable>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table for `language`, replacing any existing one
    pub fn with_table<K, V>(mut self, language: LanguageIdentifier, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let table = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.tables.insert(language, table);
        self
    }
}

impl TranslationLoader for MemoryLoader {
    fn load_table(&self, language: &LanguageIdentifier) -> Result<TranslationTable> {
        self.tables
            .get(language)
            .cloned()
            .ok_or_else(|| LangTableError::SourceUnavailable {
                language: language.clone(),
                path: PathBuf::from(format!("memory:{}", language)),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no in-memory table"),
            })
    }
}
