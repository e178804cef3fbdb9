//! ONNX Runtime classifier
//!
//! The model graph takes one float tensor `[1, n_features]`. A JSON schema
//! next to the model lists the feature order and the vocabularies used to
//! encode categorical features as their index (unseen → -1).

use std::collections::HashMap;
use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::Deserialize;

use super::{Classifier, InferenceError};
use crate::features::FeatureValue;

/// Output names tried before falling back to the last graph output
const PROBABILITY_OUTPUTS: &[&str] = &["probabilities", "output_probability"];

/// Code for a category missing from the training vocabulary
pub const UNKNOWN_CATEGORY: f32 = -1.0;

/// Feature schema stored next to the model file
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSchema {
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub cat_features: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub class_names: Vec<String>,
}

impl ModelSchema {
    pub fn from_file(path: &Path) -> Result<Self, InferenceError> {
        if !path.exists() {
            return Err(InferenceError::ModelFile(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| InferenceError::Schema(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, InferenceError> {
        let schema: ModelSchema =
            serde_json::from_str(raw).map_err(|e| InferenceError::Schema(e.to_string()))?;
        schema.validate()?;
        Ok(schema)
    }

    fn validate(&self) -> Result<(), InferenceError> {
        if self.feature_names.is_empty() {
            return Err(InferenceError::Schema("feature_names is empty".to_string()));
        }
        if let Some(name) = self
            .cat_features
            .keys()
            .find(|name| !self.feature_names.contains(name))
        {
            return Err(InferenceError::Schema(format!(
                "categorical feature {:?} is not in feature_names",
                name
            )));
        }
        Ok(())
    }

    /// Encode selected features (in `feature_names` order) as model input
    pub fn encode(&self, features: &[FeatureValue]) -> Result<Vec<f32>, InferenceError> {
        if features.len() != self.feature_names.len() {
            return Err(InferenceError::Schema(format!(
                "expected {} features, got {}",
                self.feature_names.len(),
                features.len()
            )));
        }

        self.feature_names
            .iter()
            .zip(features)
            .map(|(name, value)| match self.cat_features.get(name) {
                Some(vocab) => {
                    let category = value.as_category();
                    Ok(vocab
                        .iter()
                        .position(|c| *c == category)
                        .map(|i| i as f32)
                        .unwrap_or(UNKNOWN_CATEGORY))
                }
                None => value.as_number().map(|v| v as f32).ok_or_else(|| {
                    InferenceError::UnsupportedValue {
                        name: name.clone(),
                        value: value.as_category(),
                    }
                }),
            })
            .collect()
    }
}

/// Classifier backed by an ONNX Runtime session
pub struct OnnxClassifier {
    // Session::run needs exclusive access
    session: Mutex<Session>,
    output_name: String,
    schema: ModelSchema,
}

impl OnnxClassifier {
    pub fn load(model_path: &Path, schema_path: &Path) -> Result<Self, InferenceError> {
        tracing::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(InferenceError::ModelFile(model_path.display().to_string()));
        }
        let schema = ModelSchema::from_file(schema_path)?;

        let session = Session::builder()
            .map_err(|e| InferenceError::Runtime(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::Runtime(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::Runtime(format!("Failed to load model: {}", e)))?;

        let output_name = PROBABILITY_OUTPUTS
            .iter()
            .find_map(|wanted| session.outputs.iter().find(|o| o.name == *wanted))
            .or_else(|| session.outputs.last())
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::Output("model defines no outputs".to_string()))?;

        tracing::info!(
            "ONNX model loaded: {} features, output {:?}",
            schema.feature_names.len(),
            output_name
        );

        Ok(Self {
            session: Mutex::new(session),
            output_name,
            schema,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn feature_names(&self) -> &[String] {
        &self.schema.feature_names
    }

    fn class_names(&self) -> &[String] {
        &self.schema.class_names
    }

    fn backend(&self) -> &'static str {
        "ONNX Runtime (CPU)"
    }

    fn predict_proba(&self, features: &[FeatureValue]) -> Result<Vec<Vec<f64>>, InferenceError> {
        let encoded = self.schema.encode(features)?;
        let width = encoded.len();

        let input_array = Array2::<f32>::from_shape_vec((1, width), encoded)
            .map_err(|e| InferenceError::Runtime(format!("Array error: {}", e)))?;
        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::Runtime(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Runtime(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(self.output_name.as_str())
            .ok_or_else(|| InferenceError::Output(format!("missing output {:?}", self.output_name)))?;
        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Output(format!("Extract error: {}", e)))?;

        let dims: Vec<i64> = shape.iter().copied().collect();
        proba_rows(&dims, data)
    }
}

/// Split a flat probability tensor into rows
pub fn proba_rows(dims: &[i64], data: &[f32]) -> Result<Vec<Vec<f64>>, InferenceError> {
    let columns = match dims {
        [_rows, cols] => usize::try_from(*cols).unwrap_or(0),
        [cols] => usize::try_from(*cols).unwrap_or(0),
        _ => return Err(InferenceError::Output(format!("unsupported output shape {:?}", dims))),
    };
    if columns == 0 || data.len() % columns != 0 {
        return Err(InferenceError::Output(format!(
            "output shape {:?} does not fit {} values",
            dims,
            data.len()
        )));
    }

    Ok(data
        .chunks(columns)
        .map(|row| row.iter().map(|&p| f64::from(p)).collect())
        .collect())
}
