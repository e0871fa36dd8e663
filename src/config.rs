//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_HOST, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_MODEL_PATH, DEFAULT_PORT, DEFAULT_SCALER_PATH,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Classifier artifact (ONNX)
    pub model_path: PathBuf,

    /// Scaler artifact (JSON)
    pub scaler_path: PathBuf,

    /// Expected SHA-256 of the model file, hex encoded
    pub model_sha256: Option<String>,

    /// Request body cap in bytes
    pub max_upload_bytes: usize,

    /// Emit JSON log lines instead of the human format
    pub json_logs: bool,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),

            model_path: lookup("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),

            scaler_path: lookup("SCALER_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCALER_PATH)),

            model_sha256: lookup("MODEL_SHA256")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),

            max_upload_bytes: lookup("MAX_UPLOAD_BYTES")
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),

            json_logs: lookup("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),

            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
