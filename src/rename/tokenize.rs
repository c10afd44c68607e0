//! Word tokenizer for name cores.

use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel boundary regex"));

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid separator regex"));

/// Split `text` into words.
///
/// A lowercase ASCII letter followed by an uppercase one starts a new word
/// (`mySample` -> `my`, `Sample`); any run of characters that are neither
/// Unicode letters nor digits separates words. An empty result means there
/// is nothing to transform.
pub fn split_words(text: &str) -> Vec<String> {
    let spaced = CAMEL_BOUNDARY.replace_all(text, "${1} ${2}");
    SEPARATORS
        .split(&spaced)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect()
}
