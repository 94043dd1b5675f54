//! Pipeline context: the frozen model state shared by every request.
//!
//! Building the context is the one-time offline phase: corpus → vectorizer →
//! classifier. Afterwards the context is only ever read, so one instance can
//! be shared across threads behind an `Arc` without locking.

use ticketsage_core::{normalize, ModelParams, Result, TicketSageConfig};
use ticketsage_infer::CategoryModel;
use ticketsage_ingest::TrainingCorpus;
use tracing::info;

use crate::types::ModelSummary;

/// Immutable, process-wide pipeline state.
pub struct PipelineContext {
    model: CategoryModel,
    summary: ModelSummary,
}

impl PipelineContext {
    /// Fit the vectorizer and train the classifier on a prepared corpus.
    pub fn build(corpus: &TrainingCorpus, params: ModelParams) -> Result<Self> {
        let model = CategoryModel::fit(&corpus.clean_texts(), &corpus.labels(), params)?;
        let summary = ModelSummary {
            corpus_rows: corpus.len(),
            vocabulary_size: model.vocabulary_size(),
            categories: model.categories().to_vec(),
            corpus_fingerprint: corpus.fingerprint().to_string(),
        };

        info!(
            "Ticket category model trained: {} categories, {} terms, {} rows",
            summary.categories.len(),
            summary.vocabulary_size,
            summary.corpus_rows
        );

        Ok(Self { model, summary })
    }

    /// Load the configured corpus from disk and build the context.
    pub fn from_config(config: &TicketSageConfig) -> Result<Self> {
        info!("Loading training corpus from {}", config.data_paths.corpus.display());
        let corpus = ticketsage_ingest::load_corpus(&config.data_paths.corpus, &config.columns)?;
        Self::build(&corpus, config.model)
    }

    /// Predict the category of raw text.
    pub fn predict_category(&self, text: &str) -> &str {
        self.model.predict(&normalize(text))
    }

    pub fn model(&self) -> &CategoryModel {
        &self.model
    }

    pub fn summary(&self) -> &ModelSummary {
        &self.summary
    }
}
