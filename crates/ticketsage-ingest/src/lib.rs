//! TicketSage Ingest: corpus file loading, cleaning, normalization.

pub mod corpus;
pub mod file;

pub use corpus::{TrainingCorpus, TrainingExample};
pub use file::{load_records, CorpusFormat, RawRecord};

use std::path::Path;

use ticketsage_core::{CorpusColumns, Result};

/// Load a corpus file and prepare it for training.
pub fn load_corpus(path: &Path, columns: &CorpusColumns) -> Result<TrainingCorpus> {
    let records = load_records(path, columns)?;
    TrainingCorpus::prepare(records)
}
