//! Training corpus preparation: drop incomplete rows, trim, dedup, normalize.

use std::collections::{BTreeSet, HashSet};

use sha2::{Digest, Sha256};
use ticketsage_core::{normalize, Error, Result};
use tracing::{info, warn};

use crate::file::RawRecord;

/// A cleaned, labeled training example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingExample {
    /// Trimmed original text.
    pub text: String,
    /// Trimmed category label.
    pub label: String,
    /// Normalized text fed to the vectorizer.
    pub clean_text: String,
}

/// Prepared training corpus. Immutable once built.
#[derive(Debug, Clone)]
pub struct TrainingCorpus {
    examples: Vec<TrainingExample>,
    fingerprint: String,
}

impl TrainingCorpus {
    /// Clean raw rows into a training corpus.
    ///
    /// Rows with a missing or blank field are dropped, text and label are
    /// trimmed, and repeated (text, label) pairs keep their first occurrence.
    /// Fails if nothing usable remains.
    pub fn prepare(records: impl IntoIterator<Item = RawRecord>) -> Result<Self> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut examples = Vec::new();
        let mut total = 0usize;
        let mut incomplete = 0usize;
        let mut duplicates = 0usize;

        for record in records {
            total += 1;
            let (text, label) = match (record.text, record.label) {
                (Some(t), Some(l)) => (t.trim().to_string(), l.trim().to_string()),
                _ => {
                    incomplete += 1;
                    continue;
                }
            };
            if text.is_empty() || label.is_empty() {
                incomplete += 1;
                continue;
            }
            if !seen.insert((text.clone(), label.clone())) {
                duplicates += 1;
                continue;
            }
            let clean_text = normalize(&text);
            examples.push(TrainingExample {
                text,
                label,
                clean_text,
            });
        }

        if incomplete > 0 {
            warn!("Dropped {} corpus rows with missing fields", incomplete);
        }

        if examples.is_empty() {
            return Err(Error::Corpus(format!(
                "no usable training rows ({} read)",
                total
            )));
        }

        info!(
            "Prepared training corpus: {} rows ({} read, {} incomplete, {} duplicates)",
            examples.len(),
            total,
            incomplete,
            duplicates
        );

        let fingerprint = fingerprint(&examples);
        Ok(Self {
            examples,
            fingerprint,
        })
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Normalized training texts, in corpus order.
    pub fn clean_texts(&self) -> Vec<&str> {
        self.examples.iter().map(|e| e.clean_text.as_str()).collect()
    }

    /// Labels, in corpus order.
    pub fn labels(&self) -> Vec<&str> {
        self.examples.iter().map(|e| e.label.as_str()).collect()
    }

    /// Distinct labels, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.examples
            .iter()
            .map(|e| e.label.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// SHA-256 hex digest over the prepared (text, label) rows.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn fingerprint(examples: &[TrainingExample]) -> String {
    let mut hasher = Sha256::new();
    for e in examples {
        hasher.update(e.text.as_bytes());
        hasher.update([0u8]);
        hasher.update(e.label.as_bytes());
        hasher.update([b'\n']);
    }
    hex::encode(hasher.finalize())
}
