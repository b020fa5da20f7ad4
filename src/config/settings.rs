//! Application settings management
//!
//! Settings are read from an optional `langtable.toml` file and from
//! `LANGTABLE__`-prefixed environment variables, e.g.
//! `LANGTABLE__I18N__TRANSLATIONS_PATH=locales/`.

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Translation source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Prefix each language code is appended to, trailing separator included
    pub translations_path: String,
    /// Supported language codes; the first one is the default
    pub supported_languages: Vec<String>,
    pub file_extension: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the rolling log file; stdout only when unset
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from `langtable.toml` and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("langtable")
    }

    /// Load settings from the named file (extension optional) and environment variables
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("LANGTABLE")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("i18n.supported_languages")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load `langtable.toml` and environment settings, then validate them
    pub fn load() -> crate::utils::errors::Result<Self> {
        let settings = Self::new()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::utils::errors::Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            translations_path: "translations/".to_string(),
            supported_languages: vec!["en".to_string()],
            file_extension: ".json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}
