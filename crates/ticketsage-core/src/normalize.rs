//! Text normalization shared by training and inference.
//!
//! Lowercases, strips everything except ASCII letters, digits and
//! whitespace, then collapses whitespace runs into single spaces.

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize free text into the `[a-z0-9 ]` alphabet.
///
/// Non-ASCII characters are dropped, not transliterated.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = DISALLOWED_RE.replace_all(&lower, "");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}
