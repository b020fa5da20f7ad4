//! langtable
//!
//! Per-language translation tables loaded from flat JSON files, with BCP-47
//! language negotiation from explicit codes or `Accept-Language`-style
//! preference strings, and `{name}` placeholder substitution.

pub mod config;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LangTableError, Result};

pub use i18n::{SupportedLanguages, TranslationParams, Translator};
pub use unic_langid::LanguageIdentifier;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
