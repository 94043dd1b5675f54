//! Ticket pipeline output types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use ticketsage_extract::{Entities, Priority};

/// Lifecycle status of a generated ticket. New tickets are always open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
}

/// Status carried by a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RejectionStatus {
    Invalid,
}

/// Structured support ticket produced from accepted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Short opaque identifier (8 hex characters).
    pub ticket_id: String,
    /// Capitalized category followed by "Issue".
    pub title: String,
    /// Raw user input, unchanged.
    pub description: String,
    /// Normalized input used for classification.
    pub cleaned_description: String,
    pub category: String,
    pub priority: Priority,
    pub entities: Entities,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}

/// Returned instead of a ticket when the validity gate rejects the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RejectionRecord {
    pub status: RejectionStatus,
    pub message: String,
}

/// Exactly one of a ticket or a rejection, per input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TicketOutcome {
    Ticket(Ticket),
    Rejected(RejectionRecord),
}

impl TicketOutcome {
    pub fn is_ticket(&self) -> bool {
        matches!(self, Self::Ticket(_))
    }

    pub fn as_ticket(&self) -> Option<&Ticket> {
        match self {
            Self::Ticket(t) => Some(t),
            Self::Rejected(_) => None,
        }
    }

    pub fn into_ticket(self) -> Option<Ticket> {
        match self {
            Self::Ticket(t) => Some(t),
            Self::Rejected(_) => None,
        }
    }

    /// The `status` field as it appears on the wire.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Ticket(_) => "open",
            Self::Rejected(_) => "invalid",
        }
    }
}

/// Description of the trained model, for introspection endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Prepared training rows.
    pub corpus_rows: usize,
    /// Terms in the frozen vocabulary.
    pub vocabulary_size: usize,
    /// Predictable labels, sorted.
    pub categories: Vec<String>,
    /// SHA-256 hex digest of the prepared corpus.
    pub corpus_fingerprint: String,
}
