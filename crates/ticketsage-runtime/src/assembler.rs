//! Ticket assembly: the per-request half of the pipeline.

use chrono::Utc;
use ticketsage_core::normalize;
use ticketsage_extract::{assess_priority, extract_entities, is_valid_ticket};
use tracing::debug;
use uuid::Uuid;

use crate::context::PipelineContext;
use crate::types::*;

/// Message carried by every rejection.
pub const REJECTION_MESSAGE: &str =
    "Input is not a valid support ticket. Please describe a real issue.";

/// Ticket title for a category: first character upper-cased, the rest
/// lower-cased, followed by "Issue".
pub fn title_for(category: &str) -> String {
    let mut chars = category.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    };
    format!("{} Issue", capitalized)
}

fn short_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

impl PipelineContext {
    /// Turn raw issue text into a ticket, or a rejection if the validity
    /// gate refuses it.
    ///
    /// Out-of-vocabulary text still receives the most probable category;
    /// there is no "unknown" outcome.
    pub fn generate_ticket(&self, user_input: &str) -> TicketOutcome {
        if !is_valid_ticket(user_input) {
            return TicketOutcome::Rejected(RejectionRecord {
                status: RejectionStatus::Invalid,
                message: REJECTION_MESSAGE.to_string(),
            });
        }

        let cleaned_description = normalize(user_input);
        let category = self.model().predict(&cleaned_description).to_string();
        let entities = extract_entities(user_input);
        let priority = assess_priority(user_input);

        let ticket = Ticket {
            ticket_id: short_id(),
            title: title_for(&category),
            description: user_input.to_string(),
            cleaned_description,
            category,
            priority,
            entities,
            status: TicketStatus::Open,
            created_at: Utc::now(),
        };

        debug!(
            "Generated ticket {} ({}, {})",
            ticket.ticket_id, ticket.category, ticket.priority
        );

        TicketOutcome::Ticket(ticket)
    }
}
