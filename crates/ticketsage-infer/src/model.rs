//! Category model: fitted vectorizer plus trained classifier.

use ticketsage_core::{ModelParams, Result};
use tracing::debug;

use crate::classifier::{Classifier, MultinomialNb};
use crate::vectorizer::TfidfVectorizer;

/// Frozen text → category model. Built once, shared read-only.
pub struct CategoryModel {
    vectorizer: TfidfVectorizer,
    classifier: Box<dyn Classifier>,
}

impl CategoryModel {
    /// Fit the vectorizer on normalized texts, then train naive Bayes on the
    /// resulting vectors.
    pub fn fit<S, L>(texts: &[S], labels: &[L], params: ModelParams) -> Result<Self>
    where
        S: AsRef<str>,
        L: AsRef<str>,
    {
        let vectorizer = TfidfVectorizer::fit(texts, params.max_features)?;
        let features = vectorizer.transform_batch(texts);
        let classifier = MultinomialNb::train(&features, labels, params.alpha)?;
        Ok(Self::new(vectorizer, Box::new(classifier)))
    }

    /// Assemble a model from an already fitted vectorizer and classifier.
    pub fn new(vectorizer: TfidfVectorizer, classifier: Box<dyn Classifier>) -> Self {
        Self {
            vectorizer,
            classifier,
        }
    }

    /// Predict the category of normalized text.
    pub fn predict(&self, clean_text: &str) -> &str {
        let features = self.vectorizer.transform(clean_text);
        let label = self.classifier.predict(&features);
        debug!("Predicted '{}' from {} active features", label, features.nnz());
        label
    }

    pub fn categories(&self) -> &[String] {
        self.classifier.classes()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }
}
