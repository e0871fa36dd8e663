//! Inference Engine - ONNX Runtime Integration
//!
//! Load và chạy ONNX model.
//! The network was trained on `(N, 178, 1)` epochs and emits one seizure
//! probability per epoch, `(N, 1)`.

use std::path::Path;

use ndarray::{Array2, Array3};
use parking_lot::Mutex;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Tensor;

use super::ArtifactError;
use crate::constants::{EEG_CHANNELS, EEG_SAMPLE_COUNT};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("tensor error: {0}")]
    Tensor(String),

    #[error("inference failed: {0}")]
    Run(String),

    #[error("unexpected model output: {0}")]
    Output(String),

    #[error("probability {0} outside [0, 1]")]
    OutOfRange(f32),
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Trait cho inference engines (ONNX, test stubs, ...)
pub trait Classifier: Send + Sync {
    /// `(N, 178, 1)` normalized epochs in, `(N, 1)` probabilities out
    fn predict(&self, batch: Array3<f32>) -> Result<Array2<f32>, InferenceError>;

    /// Human-readable engine name for status reporting
    fn engine(&self) -> &'static str;
}

/// Reshape one normalized epoch into `(1 sample, 178 timesteps, 1 channel)`
pub fn to_input_tensor(normalized: &[f32]) -> Result<Array3<f32>, InferenceError> {
    Array3::from_shape_vec((1, EEG_SAMPLE_COUNT, EEG_CHANNELS), normalized.to_vec())
        .map_err(|e| InferenceError::Tensor(e.to_string()))
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// Classifier backed by an ONNX Runtime session
pub struct OnnxClassifier {
    // Session::run needs exclusive access
    session: Mutex<Session>,
    output_name: String,
}

impl OnnxClassifier {
    /// Load ONNX model từ file
    pub fn load(model_path: &Path) -> Result<Self, ArtifactError> {
        tracing::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(ArtifactError::NotFound(model_path.to_path_buf()));
        }

        let session = Session::builder()
            .map_err(|e| ArtifactError::Session(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ArtifactError::Session(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| ArtifactError::Session(format!("Failed to load model: {}", e)))?;

        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| ArtifactError::Session("No output defined".to_string()))?;

        tracing::info!("ONNX model loaded successfully (output `{}`)", output_name);

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, batch: Array3<f32>) -> Result<Array2<f32>, InferenceError> {
        let batch_size = batch.shape()[0];

        let input_tensor = Tensor::from_array(batch)
            .map_err(|e| InferenceError::Tensor(e.to_string()))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Run(e.to_string()))?;

        let output = outputs
            .get(self.output_name.as_str())
            .ok_or_else(|| InferenceError::Output(format!("missing output `{}`", self.output_name)))?;

        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Output(e.to_string()))?;

        if data.len() != batch_size {
            return Err(InferenceError::Output(format!(
                "expected {} values, got {}",
                batch_size,
                data.len()
            )));
        }

        Array2::from_shape_vec((batch_size, 1), data.to_vec())
            .map_err(|e| InferenceError::Output(e.to_string()))
    }

    fn engine(&self) -> &'static str {
        "ONNX Runtime (CPU)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_tensor_shape() {
        let normalized: Vec<f32> = (0..EEG_SAMPLE_COUNT).map(|i| i as f32).collect();
        let tensor = to_input_tensor(&normalized).unwrap();

        assert_eq!(tensor.shape(), &[1, EEG_SAMPLE_COUNT, 1]);
        assert_eq!(tensor[[0, 0, 0]], 0.0);
        assert_eq!(tensor[[0, 177, 0]], 177.0);
    }

    #[test]
    fn test_input_tensor_wrong_length() {
        assert!(matches!(to_input_tensor(&[0.0; 10]), Err(InferenceError::Tensor(_))));
    }

    #[test]
    fn test_missing_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = OnnxClassifier::load(&dir.path().join("resnet_eeg_model.onnx"));
        assert!(matches!(result, Err(ArtifactError::NotFound(_))));
    }
}
