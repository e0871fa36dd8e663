//! EEG Sample - Core data structure for classifier input
//!
//! One epoch of exactly [`EEG_SAMPLE_COUNT`] samples. The length invariant is
//! checked once at construction, so everything downstream can index freely.

use serde::{Deserialize, Serialize};

use super::InputError;
use crate::constants::EEG_SAMPLE_COUNT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct EegSample {
    values: Vec<f32>,
}

impl EegSample {
    /// Wrap raw values, rejecting anything that is not exactly one epoch
    pub fn new(values: Vec<f32>) -> Result<Self, InputError> {
        if values.len() != EEG_SAMPLE_COUNT {
            return Err(InputError::InvalidCount { found: values.len() });
        }
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f32> {
        self.values
    }
}

impl TryFrom<Vec<f32>> for EegSample {
    type Error = InputError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<EegSample> for Vec<f32> {
    fn from(sample: EegSample) -> Self {
        sample.values
    }
}

/// Parse one already-trimmed token as a sample value.
///
/// NaN and infinities parse as floats but are rejected: they would flow
/// straight through the scaler into the network.
pub(crate) fn parse_value(token: &str) -> Result<f32, InputError> {
    match token.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::Parse {
            token: token.to_string(),
        }),
    }
}
