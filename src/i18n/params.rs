//! Placeholder substitution
//!
//! Placeholders are `{name}` where `name` is lowercase ASCII letters and
//! digits, possibly empty. Anything else in braces is left as is.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Substitution values keyed by placeholder name
pub type TranslationParams = HashMap<String, String>;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-z0-9]*)\}").expect("placeholder pattern is valid")
});

/// Replace every placeholder in `template` with its value, or with nothing if
/// `params` has no entry for it.
///
/// All placeholders are found in the template before any substitution, so a
/// value that itself contains `{name}` is inserted literally: `"{a} {b}"` with
/// `a = "{b}"` and `b = "B"` gives `"{b} B"`, not `"B {b}"`.
pub fn format_message<'a>(template: &'a str, params: &TranslationParams) -> Cow<'a, str> {
    PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        params.get(&caps[1]).map(String::as_str).unwrap_or("").to_string()
    })
}
