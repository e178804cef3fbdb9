//! Shared fixtures for unit tests

use crate::features::alphabet::AI_SYMBOLS;
use crate::features::FeatureValue;
use crate::inference::{Classifier, InferenceError};
use crate::models::{RecognitionEvent, ScoreList};

pub fn sample_event(regno: &str, time_check: &str) -> RecognitionEvent {
    RecognitionEvent {
        regno_recognize: regno.to_string(),
        afts_regno_ai: regno.to_string(),
        recognition_accuracy: 0.93,
        afts_regno_ai_score: 0.88,
        afts_regno_ai_char_scores: ScoreList::Text(
            "[0.99, 0.97, 0.95, 0.9, 0.8, 0.85, 0.7, 0.75]".to_string(),
        ),
        afts_regno_ai_length_scores: ScoreList::Text("[0.1, 0.95]".to_string()),
        camera_type: "stationary".to_string(),
        camera_class: "speed".to_string(),
        time_check: time_check.to_string(),
        direction: 1,
    }
}

/// Two-class stub: probability of class 1 is `recognition_accuracy`
pub struct StubClassifier {
    names: Vec<String>,
}

impl StubClassifier {
    pub fn new() -> Self {
        let mut names: Vec<String> = [
            "recognition_accuracy",
            "max_sym_score",
            "camera_type",
            "weekday",
            "regno_template",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        names.extend(AI_SYMBOLS.iter().map(|c| c.to_string()));
        Self { names }
    }

    pub fn with_names(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Classifier for StubClassifier {
    fn feature_names(&self) -> &[String] {
        &self.names
    }

    fn backend(&self) -> &'static str {
        "stub"
    }

    fn predict_proba(&self, features: &[FeatureValue]) -> Result<Vec<Vec<f64>>, InferenceError> {
        let p = features.first().and_then(FeatureValue::as_number).unwrap_or(0.5);
        Ok(vec![vec![1.0 - p, p]])
    }
}
