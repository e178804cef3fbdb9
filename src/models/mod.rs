//! Request/response types

pub mod recognition;
pub mod status;

pub use recognition::{PredictionResponse, RecognitionEvent, ScoreList};
pub use status::{HealthResponse, ModelInfoResponse};
