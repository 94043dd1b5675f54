//! Shared application state.

use ticketsage_core::TicketSageConfig;
use ticketsage_runtime::PipelineContext;

/// Shared application state accessible from all route handlers.
///
/// The pipeline is fully trained before the state exists and is never
/// mutated afterwards, so handlers read it without locking.
pub struct AppState {
    pub config: TicketSageConfig,
    pub pipeline: PipelineContext,
}

impl AppState {
    pub fn new(config: TicketSageConfig, pipeline: PipelineContext) -> Self {
        Self { config, pipeline }
    }
}
