//! Device and error-code extraction from raw ticket text.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Device keywords matched against whole lowercase tokens.
pub const DEVICE_KEYWORDS: &[&str] = &[
    "laptop", "mouse", "keyboard", "printer", "wifi", "router", "monitor", "cpu",
];

// 3-4 digit whole words, e.g. "404" or "5001".
static ERROR_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{3,4}\b").unwrap());

/// Entities found in a ticket description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    /// Device mentions; a set, order not significant.
    pub devices: BTreeSet<String>,
    /// Error codes in order of appearance, duplicates kept.
    pub error_codes: Vec<String>,
}

/// Extract devices and error codes from raw text.
pub fn extract_entities(text: &str) -> Entities {
    Entities {
        devices: extract_devices(text),
        error_codes: extract_error_codes(text),
    }
}

/// Lowercase each whitespace token and keep the ones that are device keywords.
///
/// Punctuation is not stripped, so "laptop," does not match.
pub fn extract_devices(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|tok| DEVICE_KEYWORDS.contains(tok))
        .map(str::to_string)
        .collect()
}

/// All 3-4 digit whole-word numbers, in order.
pub fn extract_error_codes(text: &str) -> Vec<String> {
    ERROR_CODE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_devices() {
        assert_eq!(extract_devices("mouse not working"), set(&["mouse"]));
        assert_eq!(
            extract_devices("My LAPTOP and Monitor and laptop again"),
            set(&["laptop", "monitor"])
        );
        assert!(extract_devices("no hardware mentioned").is_empty());
    }

    #[test]
    fn test_devices_keep_punctuation() {
        assert!(extract_devices("my laptop, my mouse.").is_empty());
        assert_eq!(extract_devices("wifi-router down; wifi gone"), set(&["wifi"]));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(extract_error_codes("router error 404 urgent"), vec!["404"]);
        assert_eq!(
            extract_error_codes("codes 500, 5001 then 500 again"),
            vec!["500", "5001", "500"]
        );
    }

    #[test]
    fn test_error_codes_whole_words_only() {
        assert!(extract_error_codes("12 or 12345 or e404 or 404x").is_empty());
        assert_eq!(extract_error_codes("(0x1F) code:403."), vec!["403"]);
    }

    #[test]
    fn test_extract_entities() {
        let e = extract_entities("router error 404 urgent");
        assert_eq!(e.devices, set(&["router"]));
        assert_eq!(e.error_codes, vec!["404"]);

        let e = extract_entities("mouse not working");
        assert_eq!(e.devices, set(&["mouse"]));
        assert!(e.error_codes.is_empty());
    }

    #[test]
    fn test_entities_json_shape() {
        let e = extract_entities("printer 501 and printer 501");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["devices"], serde_json::json!(["printer"]));
        assert_eq!(json["error_codes"], serde_json::json!(["501", "501"]));
    }
}
