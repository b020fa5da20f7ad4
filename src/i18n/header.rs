//! Weighted language-preference parsing
//!
//! Parses values shaped like an HTTP `Accept-Language` header:
//! `lt, en-GB;q=0.8, en;q=0.5`.

use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Parse a preference string into language identifiers, most preferred first.
///
/// Entries without a weight default to `q=1`. Entries with equal weight keep
/// their order of appearance. Invalid entries, `*` and `q=0` are dropped.
pub fn parse_accept_language(header: &str) -> Vec<LanguageIdentifier> {
    let mut weighted: Vec<(LanguageIdentifier, f32)> = header
        .split(',')
        .filter_map(parse_entry)
        .collect();

    // sort_by is stable, so ties keep header order
    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));

    weighted.into_iter().map(|(language, _)| language).collect()
}

fn parse_entry(entry: &str) -> Option<(LanguageIdentifier, f32)> {
    let mut parts = entry.split(';');
    let tag = parts.next()?.trim();
    if tag.is_empty() || tag == "*" {
        return None;
    }

    let mut quality = 1.0_f32;
    for param in parts {
        let Some((name, value)) = param.split_once('=') else {
            debug!(entry = entry, "Skipping preference entry with malformed parameter");
            return None;
        };
        if name.trim().eq_ignore_ascii_case("q") {
            quality = match value.trim().parse::<f32>() {
                Ok(q) if (0.0..=1.0).contains(&q) => q,
                _ => {
                    debug!(entry = entry, "Skipping preference entry with invalid weight");
                    return None;
                }
            };
        }
    }

    if quality == 0.0 {
        return None;
    }

    match tag.parse::<LanguageIdentifier>() {
        Ok(language) => Some((language, quality)),
        Err(_) => {
            debug!(tag = tag, "Skipping unparseable language tag");
            None
        }
    }
}
