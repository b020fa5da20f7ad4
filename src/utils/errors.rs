//! Error handling for langtable
//!
//! All failures surface at construction time. Once a translator exists,
//! language selection and lookups are total and never return an error.

use std::path::PathBuf;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Main error type for langtable
#[derive(Error, Debug)]
pub enum LangTableError {
    #[error("Translation source for '{language}' unavailable at {}: {source}", .path.display())]
    SourceUnavailable {
        language: LanguageIdentifier,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed translation data for '{language}' at {}: {source}", .path.display())]
    MalformedData {
        language: LanguageIdentifier,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid language identifier: {0}")]
    InvalidLanguage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),
}

/// Result type alias for langtable operations
pub type Result<T> = std::result::Result<T, LangTableError>;

impl LangTableError {
    /// Check if retrying the same operation could succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            LangTableError::SourceUnavailable { .. } => true,
            LangTableError::MalformedData { .. } => false,
            LangTableError::InvalidLanguage(_) => false,
            LangTableError::Config(_) => false,
            LangTableError::Settings(_) => false,
        }
    }

    /// Language whose table failed to load, if any
    pub fn language(&self) -> Option<&LanguageIdentifier> {
        match self {
            LangTableError::SourceUnavailable { language, .. }
            | LangTableError::MalformedData { language, .. } => Some(language),
            _ => None,
        }
    }
}
