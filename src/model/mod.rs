//! Model Module - Scaler + classifier inference
//!
//! Tách logic inference khỏi input handling.
//! The two artifacts load once into an [`InferenceContext`] and are read-only
//! afterwards.

pub mod scaler;
pub mod inference;
pub mod checksum;
pub mod scoring;
pub mod context;

// Re-export common types
pub use inference::InferenceError;
pub use scoring::PredictionResult;
pub use context::{InferenceContext, ModelStatus};

use std::path::PathBuf;

/// Failures loading the model or scaler. Fatal: nothing can be scored
/// without both artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scaler file {}: {source}", .path.display())]
    ScalerFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("scaler field `{field}` has {found} entries, expected {expected}")]
    ScalerDimension {
        field: &'static str,
        found: usize,
        expected: usize,
    },

    #[error("scaler field `{field}` contains a non-finite value")]
    ScalerNonFinite { field: &'static str },

    #[error("model checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("failed to load ONNX model: {0}")]
    Session(String),
}
