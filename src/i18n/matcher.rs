//! Language negotiation
//!
//! Resolves a requested language, or a weighted list of them, to one member
//! of the supported list. Desired languages are tried in preference order and
//! the first one that matches anything decides the result. For that language
//! the best supported candidate wins, ranked as:
//!
//! 1. exact: identical canonical tag
//! 2. range: one tag is a less specific form of the other (`en` / `en-GB`)
//! 3. language: same primary language, different script or region
//!
//! Ties go to the earlier supported entry. When nothing matches the default
//! (first supported) language is returned, so matching never fails.

use tracing::debug;
use unic_langid::LanguageIdentifier;

use super::header::parse_accept_language;
use super::language::SupportedLanguages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchQuality {
    Language,
    Range,
    Exact,
}

/// Matches preferences against a fixed supported list
#[derive(Debug, Clone)]
pub struct LanguageMatcher {
    supported: SupportedLanguages,
}

impl LanguageMatcher {
    pub fn new(supported: SupportedLanguages) -> Self {
        Self { supported }
    }

    pub fn supported(&self) -> &SupportedLanguages {
        &self.supported
    }

    pub fn default_language(&self) -> &LanguageIdentifier {
        self.supported.default_language()
    }

    /// Best supported language for `desired`, most preferred first
    pub fn best_match(&self, desired: &[LanguageIdentifier]) -> &LanguageIdentifier {
        match self.find_match(desired) {
            Some((language, _)) => language,
            None => {
                debug!(
                    default = %self.default_language(),
                    "No supported language matched, using default"
                );
                self.default_language()
            }
        }
    }

    /// Best supported language for a code.
    ///
    /// A bare tag is a one-entry preference list, so `code` may also be a
    /// full weighted list such as `lt-LT,en;q=0.5`. Unparseable input gets
    /// the default.
    pub fn match_code(&self, code: &str) -> &LanguageIdentifier {
        let desired = parse_accept_language(code);
        if desired.is_empty() {
            debug!(code = code, "No usable language in code, using default");
        }
        self.best_match(&desired)
    }

    /// Best supported language for a weighted preference string
    pub fn match_header(&self, header: &str) -> &LanguageIdentifier {
        self.best_match(&parse_accept_language(header))
    }

    /// Matched language with its quality, or `None` when nothing matches
    pub fn find_match(
        &self,
        desired: &[LanguageIdentifier],
    ) -> Option<(&LanguageIdentifier, MatchQuality)> {
        desired.iter().find_map(|wanted| self.best_candidate(wanted))
    }

    fn best_candidate(&self, wanted: &LanguageIdentifier) -> Option<(&LanguageIdentifier, MatchQuality)> {
        let mut best: Option<(&LanguageIdentifier, MatchQuality)> = None;

        for candidate in &self.supported {
            let Some(quality) = match_quality(wanted, candidate) else {
                continue;
            };
            if best.map_or(true, |(_, current)| quality > current) {
                best = Some((candidate, quality));
                if quality == MatchQuality::Exact {
                    break;
                }
            }
        }

        best
    }
}

/// How well `candidate` serves a request for `wanted`
pub fn match_quality(wanted: &LanguageIdentifier, candidate: &LanguageIdentifier) -> Option<MatchQuality> {
    if wanted == candidate {
        return Some(MatchQuality::Exact);
    }
    if wanted.language != candidate.language {
        return None;
    }
    if covers(candidate, wanted) || covers(wanted, candidate) {
        Some(MatchQuality::Range)
    } else {
        Some(MatchQuality::Language)
    }
}

/// True when every subtag `range` specifies is equal in `tag`
fn covers(range: &LanguageIdentifier, tag: &LanguageIdentifier) -> bool {
    fn subtag<T: PartialEq>(range: &Option<T>, tag: &Option<T>) -> bool {
        range.is_none() || range == tag
    }

    let range_variants: Vec<_> = range.variants().collect();
    let variants_ok = range_variants.is_empty() || range_variants == tag.variants().collect::<Vec<_>>();

    subtag(&range.script, &tag.script) && subtag(&range.region, &tag.region) && variants_ok
}
