//! Features Module - recognition event → model feature vector
//!
//! Every rule here must match what the classifier saw during training.

pub mod alphabet;
pub mod calendar;
pub mod scores;
pub mod template;
pub mod vector;

#[cfg(test)]
mod tests;

use thiserror::Error;

pub use vector::{build_features, FeatureValue, FeatureVector};

/// Per-record feature construction failure
#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("unparsable time_check: {0:?}")]
    InvalidTimestamp(String),
}
