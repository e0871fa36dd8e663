//! Scaler - fitted normalization applied before inference
//!
//! The scaler is fitted offline together with the network. Only its fitted
//! parameters travel here, as JSON:
//!
//! ```json
//! { "kind": "standard", "mean": [..178], "scale": [..178] }
//! { "kind": "min_max",  "min":  [..178], "max":   [..178] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ArtifactError;
use crate::constants::EEG_SAMPLE_COUNT;
use crate::input::EegSample;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// z = (x - mean) / scale
    Standard { mean: Vec<f32>, scale: Vec<f32> },

    /// z = (x - min) / (max - min)
    MinMax { min: Vec<f32>, max: Vec<f32> },
}

impl Scaler {
    /// Load and validate a scaler artifact
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        tracing::info!("Loading scaler from: {}", path.display());

        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let scaler: Scaler =
            serde_json::from_str(&raw).map_err(|source| ArtifactError::ScalerFormat {
                path: path.to_path_buf(),
                source,
            })?;

        scaler.validate()?;
        tracing::info!("Scaler loaded ({})", scaler.kind());

        Ok(scaler)
    }

    /// Every parameter vector must cover exactly one epoch with finite values
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let fields: [(&'static str, &[f32]); 2] = match self {
            Scaler::Standard { mean, scale } => [("mean", mean.as_slice()), ("scale", scale.as_slice())],
            Scaler::MinMax { min, max } => [("min", min.as_slice()), ("max", max.as_slice())],
        };

        for (field, values) in fields {
            if values.len() != EEG_SAMPLE_COUNT {
                return Err(ArtifactError::ScalerDimension {
                    field,
                    found: values.len(),
                    expected: EEG_SAMPLE_COUNT,
                });
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(ArtifactError::ScalerNonFinite { field });
            }
        }

        Ok(())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Scaler::Standard { .. } => "standard",
            Scaler::MinMax { .. } => "min_max",
        }
    }

    /// Normalize one epoch feature-wise
    pub fn transform(&self, sample: &EegSample) -> Vec<f32> {
        let values = sample.as_slice();

        match self {
            Scaler::Standard { mean, scale } => values
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(&x, (&m, &s))| {
                    // zero-variance features were fitted with scale 1
                    let s = if s == 0.0 { 1.0 } else { s };
                    (x - m) / s
                })
                .collect(),
            Scaler::MinMax { min, max } => values
                .iter()
                .zip(min.iter().zip(max))
                .map(|(&x, (&lo, &hi))| {
                    // constant features were fitted with range 1
                    let range = hi - lo;
                    let range = if range == 0.0 { 1.0 } else { range };
                    (x - lo) / range
                })
                .collect(),
        }
    }

    /// Pass-through scaler
    #[cfg(test)]
    pub fn identity() -> Self {
        Scaler::Standard {
            mean: vec![0.0; EEG_SAMPLE_COUNT],
            scale: vec![1.0; EEG_SAMPLE_COUNT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_of(value: f32) -> EegSample {
        EegSample::new(vec![value; EEG_SAMPLE_COUNT]).unwrap()
    }

    fn write_json(value: &serde_json::Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", value).unwrap();
        file
    }

    #[test]
    fn test_standard_transform() {
        let scaler = Scaler::Standard {
            mean: vec![10.0; EEG_SAMPLE_COUNT],
            scale: vec![4.0; EEG_SAMPLE_COUNT],
        };
        let out = scaler.transform(&sample_of(18.0));
        assert_eq!(out.len(), EEG_SAMPLE_COUNT);
        assert!(out.iter().all(|&z| (z - 2.0).abs() < 1e-6));
    }

    #[test]
    fn test_standard_zero_scale() {
        let scaler = Scaler::Standard {
            mean: vec![1.0; EEG_SAMPLE_COUNT],
            scale: vec![0.0; EEG_SAMPLE_COUNT],
        };
        let out = scaler.transform(&sample_of(3.0));
        assert!(out.iter().all(|&z| z == 2.0));
    }

    #[test]
    fn test_min_max_zero_range() {
        let scaler = Scaler::MinMax {
            min: vec![5.0; EEG_SAMPLE_COUNT],
            max: vec![5.0; EEG_SAMPLE_COUNT],
        };
        let out = scaler.transform(&sample_of(6.0));
        assert!(out.iter().all(|&z| z == 1.0));
    }

    #[test]
    fn test_min_max_transform() {
        let scaler = Scaler::MinMax {
            min: vec![-100.0; EEG_SAMPLE_COUNT],
            max: vec![100.0; EEG_SAMPLE_COUNT],
        };
        let out = scaler.transform(&sample_of(50.0));
        assert!(out.iter().all(|&z| (z - 0.75).abs() < 1e-6));
    }

    #[test]
    fn test_identity() {
        let sample = EegSample::new((0..EEG_SAMPLE_COUNT).map(|i| i as f32).collect()).unwrap();
        assert_eq!(Scaler::identity().transform(&sample), sample.as_slice());
    }

    #[test]
    fn test_load_standard() {
        let file = write_json(&serde_json::json!({
            "kind": "standard",
            "mean": vec![0.5; EEG_SAMPLE_COUNT],
            "scale": vec![2.0; EEG_SAMPLE_COUNT],
        }));
        let scaler = Scaler::load(file.path()).unwrap();
        assert_eq!(scaler.kind(), "standard");
    }

    #[test]
    fn test_load_rejects_wrong_dimension() {
        let file = write_json(&serde_json::json!({
            "kind": "min_max",
            "min": vec![0.0; EEG_SAMPLE_COUNT],
            "max": vec![1.0; 15],
        }));
        let err = Scaler::load(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::ScalerDimension { field: "max", found: 15, .. }));
    }

    #[test]
    fn test_load_rejects_unknown_kind() {
        let file = write_json(&serde_json::json!({ "kind": "robust" }));
        assert!(matches!(Scaler::load(file.path()), Err(ArtifactError::ScalerFormat { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler_eeg.json");
        assert!(matches!(Scaler::load(&path), Err(ArtifactError::NotFound(_))));
    }
}
