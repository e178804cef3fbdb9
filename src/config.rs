//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Classifier model file
    pub model_path: PathBuf,

    /// Feature schema stored next to the model
    pub model_schema_path: PathBuf,

    /// Largest accepted prediction batch
    pub max_batch_size: usize,

    /// Log output format (text, json)
    pub log_format: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        let model_path = PathBuf::from("micromodel.onnx");
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            model_schema_path: default_schema_path(&model_path),
            model_path,
            max_batch_size: 10_000,
            log_format: "text".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.model_path);

        let model_schema_path = env::var("MODEL_SCHEMA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_schema_path(&model_path));

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            model_path,
            model_schema_path,

            max_batch_size: env::var("MAX_BATCH_SIZE")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.max_batch_size),

            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// `micromodel.onnx` → `micromodel.features.json`
fn default_schema_path(model_path: &std::path::Path) -> PathBuf {
    model_path.with_extension("features.json")
}
