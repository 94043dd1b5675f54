//! TicketSage Infer: feature extraction and category classification.
//!
//! `TfidfVectorizer` turns normalized text into sparse TF-IDF vectors over a
//! frozen vocabulary. The `Classifier` trait abstracts the per-request
//! prediction step; `MultinomialNb` is the trained implementation.
//! `CategoryModel` bundles both and is built once at startup.

pub mod classifier;
pub mod model;
pub mod vectorizer;

pub use classifier::{Classifier, MultinomialNb};
pub use model::CategoryModel;
pub use vectorizer::{FeatureVector, TfidfVectorizer};
