//! Inference Module - model loading and probability prediction
//!
//! The classifier is opaque behind the `Classifier` trait so the backend
//! can be swapped without touching feature engineering or handlers.

pub mod classifier;
pub mod onnx;
pub mod predictor;


use thiserror::Error;

use crate::features::FeatureError;

pub use classifier::{select_features, Classifier};
pub use onnx::{ModelSchema, OnnxClassifier};
pub use predictor::RegnoPredictor;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error("model expects feature {0:?} which was not produced")]
    MissingFeature(String),

    #[error("feature {name:?} is numeric in the model but got text {value:?}")]
    UnsupportedValue { name: String, value: String },

    #[error("model file not found: {0}")]
    ModelFile(String),

    #[error("invalid model schema: {0}")]
    Schema(String),

    #[error("inference runtime error: {0}")]
    Runtime(String),

    #[error("unexpected model output: {0}")]
    Output(String),
}
