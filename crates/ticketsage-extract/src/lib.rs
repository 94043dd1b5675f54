//! TicketSage Extract: rule-based checks and extraction on raw ticket text.
//!
//! Nothing here is learned: the validity gate, device keywords, error-code
//! pattern and priority keywords are fixed lists.

pub mod entities;
pub mod priority;
pub mod validity;

pub use entities::{extract_devices, extract_entities, extract_error_codes, Entities};
pub use priority::{assess_priority, Priority};
pub use validity::is_valid_ticket;
