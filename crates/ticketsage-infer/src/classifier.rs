//! Category classifier trait and multinomial naive Bayes implementation.

use std::collections::BTreeMap;

use ndarray::{Array1, Array2};
use ticketsage_core::{Error, Result};
use tracing::info;

use crate::vectorizer::FeatureVector;

/// Trait for trained category classifiers.
pub trait Classifier: Send + Sync {
    /// Predict the most likely label. Always returns one of `classes()`.
    fn predict(&self, features: &FeatureVector) -> &str;

    /// Labels this classifier can return, sorted.
    fn classes(&self) -> &[String];
}

/// Multinomial naive Bayes with additive smoothing.
///
/// Class priors come from label frequencies; per-class feature likelihoods
/// from summed feature weights plus `alpha`.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    classes: Vec<String>,
    /// log P(class), one per class.
    class_log_prior: Array1<f64>,
    /// log P(feature | class), shape [classes, features].
    feature_log_prob: Array2<f64>,
}

impl MultinomialNb {
    /// Train on feature vectors and their labels.
    pub fn train<L: AsRef<str>>(
        features: &[FeatureVector],
        labels: &[L],
        alpha: f64,
    ) -> Result<Self> {
        if features.is_empty() {
            return Err(Error::Model("cannot train classifier without samples".into()));
        }
        if features.len() != labels.len() {
            return Err(Error::Model(format!(
                "{} feature vectors but {} labels",
                features.len(),
                labels.len()
            )));
        }
        if !(alpha > 0.0) {
            return Err(Error::Model(format!(
                "smoothing alpha must be positive, got {}",
                alpha
            )));
        }

        let dim = features[0].dim();
        if features.iter().any(|f| f.dim() != dim) {
            return Err(Error::Model("feature vectors differ in dimension".into()));
        }

        let class_index: BTreeMap<&str, usize> = labels
            .iter()
            .map(|l| l.as_ref())
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(i, l)| (l, i))
            .collect();
        let classes: Vec<String> = class_index.keys().map(|l| l.to_string()).collect();
        let n_classes = classes.len();

        let mut class_count = Array1::<f64>::zeros(n_classes);
        let mut feature_count = Array2::<f64>::zeros((n_classes, dim));
        for (fv, label) in features.iter().zip(labels) {
            let c = class_index[label.as_ref()];
            class_count[c] += 1.0;
            for (j, v) in fv.iter() {
                feature_count[[c, j]] += v;
            }
        }

        let n_samples = features.len() as f64;
        let class_log_prior = class_count.mapv(|count| (count / n_samples).ln());

        let smoothed = feature_count.mapv(|count| count + alpha);
        let mut feature_log_prob = smoothed.mapv(f64::ln);
        for (c, row) in smoothed.rows().into_iter().enumerate() {
            let log_total = row.sum().ln();
            feature_log_prob.row_mut(c).mapv_inplace(|v| v - log_total);
        }

        info!(
            "Trained naive Bayes classifier: {} classes, {} features, {} samples",
            n_classes,
            dim,
            features.len()
        );

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Unnormalized log posterior for every class.
    pub fn joint_log_likelihood(&self, features: &FeatureVector) -> Array1<f64> {
        let mut scores = self.class_log_prior.clone();
        for (c, score) in scores.iter_mut().enumerate() {
            for (j, v) in features.iter() {
                *score += v * self.feature_log_prob[[c, j]];
            }
        }
        scores
    }

    pub fn class_log_prior(&self) -> &Array1<f64> {
        &self.class_log_prior
    }

    pub fn n_features(&self) -> usize {
        self.feature_log_prob.ncols()
    }
}

impl Classifier for MultinomialNb {
    fn predict(&self, features: &FeatureVector) -> &str {
        let scores = self.joint_log_likelihood(features);
        let mut best = 0usize;
        let mut best_score = f64::NEG_INFINITY;
        for (i, &s) in scores.iter().enumerate() {
            if s > best_score {
                best_score = s;
                best = i;
            }
        }
        &self.classes[best]
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }
}
