//! Health and model status responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

impl HealthResponse {
    pub fn from_loaded(loaded: bool) -> Self {
        let (status, model) = if loaded { ("ok", "loaded") } else { ("error", "not loaded") };
        Self {
            status: status.to_string(),
            model: model.to_string(),
        }
    }
}

/// Loaded model metadata and runtime counters
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    pub model_path: String,
    pub backend: String,
    pub loaded_at: DateTime<Utc>,
    pub feature_names: Vec<String>,
    pub class_names: Vec<String>,
    pub inference_count: u64,
    pub avg_latency_ms: f64,
}
