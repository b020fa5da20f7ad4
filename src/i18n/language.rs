//! Supported language list
//!
//! Language identifiers are BCP-47 tags parsed by `unic_langid`, which
//! canonicalizes case (`EN-us` becomes `en-US`) so equality is on the
//! canonical form.

use std::collections::HashSet;
use std::fmt;

use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::utils::errors::{LangTableError, Result};

/// Ordered, non-empty list of supported languages.
///
/// The first entry is the default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLanguages {
    languages: Vec<LanguageIdentifier>,
}

impl SupportedLanguages {
    /// Create a supported list, keeping the first occurrence of duplicates
    pub fn new(languages: Vec<LanguageIdentifier>) -> Result<Self> {
        if languages.is_empty() {
            return Err(LangTableError::Config(
                "At least one supported language is required".to_string()
            ));
        }

        let mut seen = HashSet::with_capacity(languages.len());
        let mut unique = Vec::with_capacity(languages.len());
        for language in languages {
            if seen.insert(language.clone()) {
                unique.push(language);
            } else {
                warn!(language = %language, "Ignoring duplicate supported language");
            }
        }

        Ok(Self { languages: unique })
    }

    /// Parse language codes into a supported list
    pub fn parse<S: AsRef<str>>(codes: &[S]) -> Result<Self> {
        let languages = codes
            .iter()
            .map(|code| {
                let code = code.as_ref();
                code.parse::<LanguageIdentifier>()
                    .map_err(|_| LangTableError::InvalidLanguage(code.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(languages)
    }

    /// The default language (first entry)
    pub fn default_language(&self) -> &LanguageIdentifier {
        &self.languages[0]
    }

    pub fn contains(&self, language: &LanguageIdentifier) -> bool {
        self.languages.contains(language)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageIdentifier> {
        self.languages.iter()
    }

    pub fn as_slice(&self) -> &[LanguageIdentifier] {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl fmt::Display for SupportedLanguages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<String> = self.languages.iter().map(|l| l.to_string()).collect();
        write!(f, "{}", codes.join(", "))
    }
}

impl<'a> IntoIterator for &'a SupportedLanguages {
    type Item = &'a LanguageIdentifier;
    type IntoIter = std::slice::Iter<'a, LanguageIdentifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.iter()
    }
}
