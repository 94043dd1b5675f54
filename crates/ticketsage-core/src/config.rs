//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default training corpus filename inside the data directory.
pub const DEFAULT_CORPUS_FILE: &str = "all_tickets_processed_improved_v3.csv";

/// Paths to the TicketSage data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Labeled training corpus (`data/all_tickets_processed_improved_v3.csv`).
    pub corpus: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            corpus: root.join(DEFAULT_CORPUS_FILE),
            root,
        }
    }

    /// Override the corpus location. Relative paths resolve against the data root.
    pub fn with_corpus(mut self, corpus: impl AsRef<Path>) -> Self {
        let corpus = corpus.as_ref();
        self.corpus = if corpus.is_absolute() {
            corpus.to_path_buf()
        } else {
            self.root.join(corpus)
        };
        self
    }
}

/// Names of the text and label fields in the training corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusColumns {
    pub text: String,
    pub label: String,
}

impl Default for CorpusColumns {
    fn default() -> Self {
        Self {
            text: "Document".to_string(),
            label: "Topic_group".to_string(),
        }
    }
}

/// Hyperparameters for the category model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Vocabulary cap for the TF-IDF vectorizer.
    pub max_features: usize,
    /// Additive smoothing for the naive Bayes likelihoods.
    pub alpha: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            max_features: 5000,
            alpha: 1.0,
        }
    }
}

/// Top-level TicketSage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketSageConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data file paths.
    pub data_paths: DataPaths,
    /// Corpus field names.
    pub columns: CorpusColumns,
    /// Model hyperparameters.
    pub model: ModelParams,
}

impl TicketSageConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_vars(data_dir, |key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(data_dir: impl AsRef<Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_var(&lookup, "PORT")?.unwrap_or(8501);

        let mut data_paths = DataPaths::new(data_dir);
        if let Some(corpus) = lookup("TICKETSAGE_CORPUS") {
            data_paths = data_paths.with_corpus(corpus);
        }

        let mut columns = CorpusColumns::default();
        if let Some(text) = lookup("TICKETSAGE_TEXT_COLUMN") {
            columns.text = text;
        }
        if let Some(label) = lookup("TICKETSAGE_LABEL_COLUMN") {
            columns.label = label;
        }

        let defaults = ModelParams::default();
        let model = ModelParams {
            max_features: parse_var(&lookup, "TICKETSAGE_MAX_FEATURES")?
                .unwrap_or(defaults.max_features),
            alpha: parse_var(&lookup, "TICKETSAGE_ALPHA")?.unwrap_or(defaults.alpha),
        };

        if model.max_features == 0 {
            return Err(Error::Config(
                "TICKETSAGE_MAX_FEATURES must be at least 1".to_string(),
            ));
        }
        if !(model.alpha > 0.0 && model.alpha.is_finite()) {
            return Err(Error::Config(
                "TICKETSAGE_ALPHA must be a positive number".to_string(),
            ));
        }

        Ok(Self {
            port,
            data_paths,
            columns,
            model,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("invalid value for {}: {:?}", key, raw))),
        None => Ok(None),
    }
}
