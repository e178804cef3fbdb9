//! Recognition event and prediction wire types

use serde::{Deserialize, Serialize};

use crate::features::scores::{default_scores, parse_score_text};

/// Score list as sent by callers: a serialized string (`"[0.9, 0.8]"`,
/// the CSV export form) or a native JSON array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScoreList {
    Text(String),
    Values(Vec<f64>),
    Other(serde_json::Value),
}

impl ScoreList {
    /// Numeric scores; anything malformed degrades to `[0]`
    pub fn values(&self) -> Vec<f64> {
        match self {
            ScoreList::Text(text) => parse_score_text(text),
            ScoreList::Values(values) => values.clone(),
            ScoreList::Other(_) => default_scores(),
        }
    }
}

/// One plate recognition event. All fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionEvent {
    pub regno_recognize: String,
    pub afts_regno_ai: String,
    pub recognition_accuracy: f64,
    pub afts_regno_ai_score: f64,
    pub afts_regno_ai_char_scores: ScoreList,
    pub afts_regno_ai_length_scores: ScoreList,
    pub camera_type: String,
    pub camera_class: String,
    pub time_check: String,
    pub direction: i64,
}

/// Per-item batch result. Failed items carry an empty `prediction_proba`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    pub regno_recognize: String,
    pub prediction_proba: Vec<Vec<f64>>,
}

impl PredictionResponse {
    pub fn failed(regno_recognize: String) -> Self {
        Self {
            regno_recognize,
            prediction_proba: Vec::new(),
        }
    }
}
