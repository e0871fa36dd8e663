//! Inference Context - artifacts loaded once, shared read-only

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::checksum;
use super::inference::{to_input_tensor, Classifier, InferenceError, OnnxClassifier};
use super::scaler::Scaler;
use super::scoring::PredictionResult;
use super::ArtifactError;
use crate::config::Config;
use crate::constants::EEG_SAMPLE_COUNT;
use crate::input::EegSample;

/// Where the loaded artifacts came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provenance {
    pub model_path: String,
    pub model_sha256: Option<String>,
    pub scaler_path: String,
    pub loaded_at: DateTime<Utc>,
}

/// Engine Status for the status endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub model_loaded: bool,
    pub model_path: String,
    pub model_sha256: Option<String>,
    pub scaler_path: String,
    pub scaler_kind: String,
    pub inference_device: String,
    pub sample_count: usize,
    pub loaded_at: DateTime<Utc>,
    pub avg_latency_ms: f32,
    pub inference_count: u64,
}

/// Scaler + classifier, built once at startup
pub struct InferenceContext {
    scaler: Scaler,
    classifier: Box<dyn Classifier>,
    provenance: Provenance,

    /// Latency stats
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl InferenceContext {
    pub fn new(scaler: Scaler, classifier: Box<dyn Classifier>, provenance: Provenance) -> Self {
        Self {
            scaler,
            classifier,
            provenance,
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        }
    }

    /// Load both artifacts named by the configuration
    pub fn load(config: &Config) -> Result<Self, ArtifactError> {
        let scaler = Scaler::load(&config.scaler_path)?;

        let digest = checksum::verify_file(&config.model_path, config.model_sha256.as_deref())?;
        let classifier = OnnxClassifier::load(&config.model_path)?;

        let provenance = Provenance {
            model_path: display(&config.model_path),
            model_sha256: Some(digest),
            scaler_path: display(&config.scaler_path),
            loaded_at: Utc::now(),
        };

        Ok(Self::new(scaler, Box::new(classifier), provenance))
    }

    /// Scale, reshape, classify and score one epoch
    pub fn score(&self, sample: &EegSample) -> Result<PredictionResult, InferenceError> {
        let start_time = Instant::now();

        let normalized = self.scaler.transform(sample);
        let input = to_input_tensor(&normalized)?;
        let output = self.classifier.predict(input)?;

        let probability = match output.as_slice() {
            Some(&[p]) => p,
            _ => {
                return Err(InferenceError::Output(format!(
                    "expected shape (1, 1), got {:?}",
                    output.shape()
                )))
            }
        };
        if !(0.0..=1.0).contains(&probability) {
            return Err(InferenceError::OutOfRange(probability));
        }

        let inference_time = start_time.elapsed().as_micros() as u64;

        // Track metrics
        self.latency_sum_us.fetch_add(inference_time, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        Ok(PredictionResult::from_probability(probability, inference_time))
    }

    pub fn status(&self) -> ModelStatus {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 { (sum as f32 / count as f32) / 1000.0 } else { 0.0 };

        ModelStatus {
            model_loaded: true,
            model_path: self.provenance.model_path.clone(),
            model_sha256: self.provenance.model_sha256.clone(),
            scaler_path: self.provenance.scaler_path.clone(),
            scaler_kind: self.scaler.kind().to_string(),
            inference_device: self.classifier.engine().to_string(),
            sample_count: EEG_SAMPLE_COUNT,
            loaded_at: self.provenance.loaded_at,
            avg_latency_ms: avg,
            inference_count: count,
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
pub(crate) mod testing {
    //! Stub classifier shared by the model and handler tests

    use super::*;
    use ndarray::{Array2, Array3};

    /// Returns the same probability for every epoch
    pub struct FixedClassifier(pub f32);

    impl Classifier for FixedClassifier {
        fn predict(&self, batch: Array3<f32>) -> Result<Array2<f32>, InferenceError> {
            Ok(Array2::from_elem((batch.shape()[0], 1), self.0))
        }

        fn engine(&self) -> &'static str {
            "fixed"
        }
    }

    /// Probability is the mean of the normalized input, so tests can observe
    /// what the scaler did
    pub struct MeanClassifier;

    impl Classifier for MeanClassifier {
        fn predict(&self, batch: Array3<f32>) -> Result<Array2<f32>, InferenceError> {
            let mean = batch.mean().unwrap_or(0.0);
            Ok(Array2::from_elem((batch.shape()[0], 1), mean))
        }

        fn engine(&self) -> &'static str {
            "mean"
        }
    }

    pub fn provenance() -> Provenance {
        Provenance {
            model_path: "memory".to_string(),
            model_sha256: None,
            scaler_path: "memory".to_string(),
            loaded_at: Utc::now(),
        }
    }

    pub fn context_with(probability: f32) -> InferenceContext {
        InferenceContext::new(
            Scaler::identity(),
            Box::new(FixedClassifier(probability)),
            provenance(),
        )
    }
}
