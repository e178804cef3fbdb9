//! Classifier seam and feature selection

use super::InferenceError;
use crate::features::{FeatureValue, FeatureVector};

/// Trained class-probability model
pub trait Classifier: Send + Sync {
    /// Feature names the model was trained on, in input order
    fn feature_names(&self) -> &[String];

    /// Class labels in probability column order, if known
    fn class_names(&self) -> &[String] {
        &[]
    }

    /// Short backend identifier for status reporting
    fn backend(&self) -> &'static str;

    /// One probability row per input object
    fn predict_proba(&self, features: &[FeatureValue]) -> Result<Vec<Vec<f64>>, InferenceError>;
}

/// Pick the model's features out of a (possibly larger) feature vector.
///
/// Extra keys are dropped; a missing expected key is an error.
pub fn select_features(
    vector: &FeatureVector,
    names: &[String],
) -> Result<Vec<FeatureValue>, InferenceError> {
    names
        .iter()
        .map(|name| {
            vector
                .get(name)
                .cloned()
                .ok_or_else(|| InferenceError::MissingFeature(name.clone()))
        })
        .collect()
}
