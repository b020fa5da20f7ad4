//! Configuration validation module
//!
//! Checks settings before any translation table is touched so that
//! misconfiguration is reported once, at startup.

use std::collections::HashSet;

use unic_langid::LanguageIdentifier;

use super::Settings;
use crate::utils::errors::{LangTableError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate translation source configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.translations_path.is_empty() {
        return Err(LangTableError::Config(
            "Translations path is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(LangTableError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    let mut seen = HashSet::new();
    for code in &config.supported_languages {
        let language: LanguageIdentifier = code
            .parse()
            .map_err(|_| LangTableError::InvalidLanguage(code.clone()))?;
        if !seen.insert(language) {
            return Err(LangTableError::Config(
                format!("Duplicate supported language: {}", code)
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LangTableError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LangTableError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
