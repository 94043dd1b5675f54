//! Keyword-based priority assignment.

use serde::{Deserialize, Serialize};

/// Substrings that mark a ticket as urgent.
pub const URGENT_KEYWORDS: &[&str] = &["urgent", "asap", "immediately", "not working", "down"];

/// Binary ticket priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// `High` if the lowercased text contains any urgent keyword as a substring.
///
/// Matching is not tokenized: "shutdown" contains "down".
pub fn assess_priority(text: &str) -> Priority {
    let lower = text.to_lowercase();
    if URGENT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Priority::High
    } else {
        Priority::Low
    }
}
