//! Regno predictor - feature building + model call + runtime stats

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::{DateTime, Utc};

use super::{select_features, Classifier, InferenceError, OnnxClassifier};
use crate::features::build_features;
use crate::models::{ModelInfoResponse, PredictionResponse, RecognitionEvent};

/// Loaded model plus its metadata. Read-only after construction apart
/// from the latency counters.
pub struct RegnoPredictor {
    classifier: Box<dyn Classifier>,
    model_path: String,
    loaded_at: DateTime<Utc>,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl RegnoPredictor {
    pub fn new(classifier: Box<dyn Classifier>, model_path: impl Into<String>) -> Self {
        Self {
            classifier,
            model_path: model_path.into(),
            loaded_at: Utc::now(),
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        }
    }

    /// Load the ONNX model and its schema.
    ///
    /// Returns `None` (after logging) when the model cannot be loaded, so
    /// the service still starts and reports itself unhealthy.
    pub fn load(model_path: &Path, schema_path: &Path) -> Option<Self> {
        if !model_path.exists() {
            tracing::warn!("{} not found. Prediction will fail.", model_path.display());
            return None;
        }

        match OnnxClassifier::load(model_path, schema_path) {
            Ok(classifier) => {
                tracing::info!("Model loaded successfully.");
                Some(Self::new(Box::new(classifier), model_path.display().to_string()))
            }
            Err(InferenceError::ModelFile(path)) => {
                tracing::warn!("{} not found. Prediction will fail.", path);
                None
            }
            Err(e) => {
                tracing::error!("Failed to load model {}: {}", model_path.display(), e);
                None
            }
        }
    }

    /// Class probabilities for one event
    pub fn predict(&self, event: &RecognitionEvent) -> Result<Vec<Vec<f64>>, InferenceError> {
        let start_time = Instant::now();

        let vector = build_features(event)?;
        tracing::trace!(features = %vector.to_log_entry(), "feature vector built");
        let selected = select_features(&vector, self.classifier.feature_names())?;
        let proba = self.classifier.predict_proba(&selected)?;

        self.latency_sum_us
            .fetch_add(start_time.elapsed().as_micros() as u64, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        Ok(proba)
    }

    /// Predict every event in order. A failed item yields an empty
    /// probability list and does not affect the rest of the batch.
    pub fn predict_batch(&self, events: &[RecognitionEvent]) -> Vec<PredictionResponse> {
        events
            .iter()
            .map(|event| match self.predict(event) {
                Ok(proba) => PredictionResponse {
                    regno_recognize: event.regno_recognize.clone(),
                    prediction_proba: proba,
                },
                Err(e) => {
                    tracing::warn!("Error processing item {}: {}", event.regno_recognize, e);
                    PredictionResponse::failed(event.regno_recognize.clone())
                }
            })
            .collect()
    }

    pub fn info(&self) -> ModelInfoResponse {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 { (sum as f64 / count as f64) / 1000.0 } else { 0.0 };

        ModelInfoResponse {
            model_path: self.model_path.clone(),
            backend: self.classifier.backend().to_string(),
            loaded_at: self.loaded_at,
            feature_names: self.classifier.feature_names().to_vec(),
            class_names: self.classifier.class_names().to_vec(),
            inference_count: count,
            avg_latency_ms: avg,
        }
    }
}
