//! TicketSage Runtime: build the frozen pipeline context once, then turn
//! raw issue text into tickets.

pub mod assembler;
pub mod context;
pub mod types;

#[cfg(test)]
mod testing;

pub use assembler::{title_for, REJECTION_MESSAGE};
pub use context::PipelineContext;
pub use types::*;
