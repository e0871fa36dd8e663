//! Scoring - probability to label and confidence percentages

use serde::{Deserialize, Serialize};

use crate::constants::DECISION_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    Seizure,
    NoSeizure,
}

impl Label {
    /// Inclusive threshold: exactly 0.5 is a seizure
    pub fn from_probability(probability: f32) -> Self {
        if probability >= DECISION_THRESHOLD {
            Label::Seizure
        } else {
            Label::NoSeizure
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Label::Seizure => "SEIZURE DETECTED",
            Label::NoSeizure => "NO SEIZURE DETECTED",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Label::Seizure => "High probability of seizure activity.",
            Label::NoSeizure => "Low probability of seizure activity.",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Label::Seizure => SEIZURE_TONE,
            Label::NoSeizure => NORMAL_TONE,
        }
    }
}

/// Result card colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub title_color: &'static str,
    pub border_color: &'static str,
}

pub const SEIZURE_TONE: Tone = Tone {
    title_color: "#ff6b6b",
    border_color: "rgba(244, 67, 54, 0.35)",
};

pub const NORMAL_TONE: Tone = Tone {
    title_color: "#1dd1a1",
    border_color: "rgba(29, 209, 161, 0.55)",
};

/// Prediction output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub probability: f32,           // 0.0 - 1.0
    pub label: Label,
    pub seizure_confidence_pct: f64,
    pub normal_confidence_pct: f64,
    pub inference_time_us: u64,     // Microseconds
}

impl PredictionResult {
    pub fn from_probability(probability: f32, inference_time_us: u64) -> Self {
        let p = f64::from(probability);

        Self {
            probability,
            label: Label::from_probability(probability),
            seizure_confidence_pct: p * 100.0,
            normal_confidence_pct: (1.0 - p) * 100.0,
            inference_time_us,
        }
    }
}
