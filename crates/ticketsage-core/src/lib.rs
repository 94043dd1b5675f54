//! TicketSage Core: error type, configuration, text normalization.

pub mod config;
pub mod error;
pub mod normalize;

pub use config::{CorpusColumns, DataPaths, ModelParams, TicketSageConfig};
pub use error::{Error, Result};
pub use normalize::normalize;
