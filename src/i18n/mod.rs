//! Internationalization module
//!
//! Translation tables are loaded once per supported language; a
//! [`Translator`] negotiates the best language for a client and resolves
//! keys against it.
//!
//! ```rust,ignore
//! use langtable::i18n::Translator;
//! use unic_langid::langid;
//!
//! let base = Translator::create("translations/", vec![langid!("en"), langid!("lt")])?;
//! let t = base.select_language_from_header("lt-LT,en;q=0.5");
//! assert_eq!(t.translation("greeting"), "Labas");
//! ```

pub mod header;
pub mod language;
pub mod loader;
pub mod matcher;
pub mod params;
pub mod store;
pub mod translator;

pub use header::parse_accept_language;
pub use language::SupportedLanguages;
pub use loader::{JsonFileLoader, MemoryLoader, TranslationLoader, TranslationTable};
pub use matcher::{LanguageMatcher, MatchQuality};
pub use params::{format_message, TranslationParams};
pub use store::TranslationStore;
pub use translator::Translator;
