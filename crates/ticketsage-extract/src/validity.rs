//! Validity gate: rejects greetings and too-short input before classification.

use ticketsage_core::normalize;
use tracing::debug;

/// Whole-input phrases that are never tickets.
pub const GREETINGS: &[&str] = &[
    "hi", "hello", "hey", "how are you", "thanks", "ok", "okay", "yes", "no",
];

/// Inputs with this many normalized tokens or fewer are rejected.
pub const MIN_TOKENS_EXCLUSIVE: usize = 3;

/// Decide whether raw text describes a real issue.
///
/// The greeting check compares the whole normalized string, not individual
/// tokens, so a greeting inside a longer sentence is accepted.
pub fn is_valid_ticket(text: &str) -> bool {
    let cleaned = normalize(text);
    let tokens = cleaned.split_whitespace().count();

    if tokens <= MIN_TOKENS_EXCLUSIVE {
        debug!("Rejected input: {} tokens", tokens);
        return false;
    }

    if GREETINGS.contains(&cleaned.as_str()) {
        debug!("Rejected input: greeting");
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_and_greetings() {
        for input in ["", "hi", "ok", "how are you", "Hello!!", "thanks a lot", "   "] {
            assert!(!is_valid_ticket(input), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_token_count_after_normalization() {
        // Punctuation-only tokens vanish during normalization.
        assert!(!is_valid_ticket("printer ! ! broken ?"));
        assert!(!is_valid_ticket("mouse not working"));
        assert!(is_valid_ticket("my mouse is not working"));
    }

    #[test]
    fn test_accepts_real_issues() {
        assert!(is_valid_ticket("server is down urgently"));
        assert!(is_valid_ticket("router error 404 urgent"));
        assert!(is_valid_ticket("My laptop is not working urgently. Error 404 appears."));
    }

    #[test]
    fn test_greeting_inside_sentence_accepted() {
        assert!(is_valid_ticket("hi there my friend"));
        assert!(is_valid_ticket("hello how are you doing"));
    }
}
