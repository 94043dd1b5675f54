//! TF-IDF vectorizer over a frozen, capped vocabulary.
//!
//! Tokens are whitespace-separated runs of at least two characters of
//! normalized text. Fitting keeps the `max_features` most frequent terms
//! (ties broken alphabetically) and assigns indices in alphabetical order.
//! IDF is smoothed: `ln((1 + n) / (1 + df)) + 1`. Transformed vectors hold
//! raw counts times IDF, L2-normalized.

use std::collections::{BTreeMap, HashMap};

use ndarray::Array1;
use ticketsage_core::{Error, Result};
use tracing::info;

/// Sparse feature vector. Indices are strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    dim: usize,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Build from (index, value) pairs sorted by index.
    pub fn from_sorted(dim: usize, entries: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let (indices, values) = entries.into_iter().unzip();
        Self {
            dim,
            indices,
            values,
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Value at `index`, zero when absent.
    pub fn get(&self, index: usize) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

/// Fitted TF-IDF vectorizer. Read-only after `fit`.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Array1<f64>,
}

fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().filter(|t| t.chars().count() >= 2)
}

impl TfidfVectorizer {
    /// Learn the vocabulary and IDF weights from normalized documents.
    pub fn fit<S: AsRef<str>>(documents: &[S], max_features: usize) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::Model("cannot fit vectorizer on an empty corpus".into()));
        }

        // term -> (total count, document frequency), alphabetically ordered
        let mut stats: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for doc in documents {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for tok in tokenize(doc.as_ref()) {
                *counts.entry(tok).or_insert(0) += 1;
            }
            for (tok, count) in counts {
                let entry = stats.entry(tok).or_insert((0, 0));
                entry.0 += count;
                entry.1 += 1;
            }
        }

        if stats.is_empty() {
            return Err(Error::Model(
                "empty vocabulary: training documents contain no terms".into(),
            ));
        }

        // Stable sort keeps alphabetical order among equal frequencies.
        let mut ranked: Vec<(&str, (usize, usize))> = stats.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));
        ranked.truncate(max_features);
        ranked.sort_by(|a, b| a.0.cmp(b.0));

        let n_docs = documents.len() as f64;
        let terms: Vec<String> = ranked.iter().map(|(t, _)| t.to_string()).collect();
        let idf: Array1<f64> = ranked
            .iter()
            .map(|(_, (_, df))| ((1.0 + n_docs) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();
        let vocabulary = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        info!(
            "Fitted TF-IDF vectorizer: {} terms from {} documents",
            terms.len(),
            documents.len()
        );

        Ok(Self {
            vocabulary,
            terms,
            idf,
        })
    }

    /// Map normalized text onto the fitted vocabulary. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> FeatureVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for tok in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(tok) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let weighted: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();
        let norm = weighted.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();

        FeatureVector::from_sorted(
            self.terms.len(),
            weighted.into_iter().map(|(idx, v)| (idx, v / norm)),
        )
    }

    pub fn transform_batch<S: AsRef<str>>(&self, documents: &[S]) -> Vec<FeatureVector> {
        documents.iter().map(|d| self.transform(d.as_ref())).collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Feature index of a term, if it is in the vocabulary.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Vocabulary terms ordered by feature index.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn idf(&self) -> &Array1<f64> {
        &self.idf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCS: &[&str] = &["printer jammed", "printer offline", "vpn offline"];

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fit_vocabulary_is_alphabetical() {
        let v = TfidfVectorizer::fit(DOCS, 5000).unwrap();
        assert_eq!(v.terms(), &["jammed", "offline", "printer", "vpn"]);
        assert_eq!(v.index_of("printer"), Some(2));
        assert_eq!(v.index_of("keyboard"), None);
    }

    #[test]
    fn test_smoothed_idf() {
        let v = TfidfVectorizer::fit(DOCS, 5000).unwrap();
        let printer = v.index_of("printer").unwrap();
        let jammed = v.index_of("jammed").unwrap();
        assert!(approx(v.idf()[printer], (4.0f64 / 3.0).ln() + 1.0));
        assert!(approx(v.idf()[jammed], 2.0f64.ln() + 1.0));
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let v = TfidfVectorizer::fit(DOCS, 2).unwrap();
        // printer and offline both occur twice; jammed and vpn once.
        assert_eq!(v.terms(), &["offline", "printer"]);
        assert_eq!(v.vocabulary_size(), 2);

        let v = TfidfVectorizer::fit(DOCS, 3).unwrap();
        // jammed wins the tie against vpn alphabetically.
        assert_eq!(v.terms(), &["jammed", "offline", "printer"]);
    }

    #[test]
    fn test_single_character_tokens_skipped() {
        let v = TfidfVectorizer::fit(&["a printer b", "x y"][..], 10).unwrap();
        assert_eq!(v.terms(), &["printer"]);
    }

    #[test]
    fn test_empty_vocabulary_is_error() {
        assert!(TfidfVectorizer::fit(&["a b c", ""][..], 10).is_err());
        let empty: &[&str] = &[];
        assert!(TfidfVectorizer::fit(empty, 10).is_err());
    }

    #[test]
    fn test_transform_weights_and_norm() {
        let v = TfidfVectorizer::fit(DOCS, 5000).unwrap();
        let fv = v.transform("printer printer jammed");
        assert_eq!(fv.dim(), 4);
        assert_eq!(fv.nnz(), 2);
        assert!(approx(fv.norm(), 1.0));

        let p = 2.0 * v.idf()[v.index_of("printer").unwrap()];
        let j = v.idf()[v.index_of("jammed").unwrap()];
        let n = (p * p + j * j).sqrt();
        assert!(approx(fv.get(v.index_of("printer").unwrap()), p / n));
        assert!(approx(fv.get(v.index_of("jammed").unwrap()), j / n));
    }

    #[test]
    fn test_transform_ignores_unknown_terms() {
        let v = TfidfVectorizer::fit(DOCS, 5000).unwrap();
        assert!(v.transform("keyboard mouse").is_zero());
        assert!(v.transform("").is_zero());
        assert_eq!(v.transform("vpn keyboard").nnz(), 1);
    }

    #[test]
    fn test_transform_is_repeatable() {
        let v = TfidfVectorizer::fit(DOCS, 5000).unwrap();
        let batch = v.transform_batch(&["vpn offline", "vpn offline"]);
        assert_eq!(batch[0], batch[1]);
    }
}
