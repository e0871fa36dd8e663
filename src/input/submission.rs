//! Submission - what one request actually handed us

use super::{tabular, text, EegSample, InputError};

/// Outcome of reading a request's input.
///
/// Only [`Submission::Valid`] is ever scored.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Nothing submitted yet
    Idle,
    /// Input present but rejected
    Invalid(InputError),
    /// Exactly one epoch, ready for inference
    Valid(EegSample),
}

impl Submission {
    /// Resolve the two sources. A present file is authoritative and the text
    /// is not looked at.
    pub fn from_sources(file: Option<&[u8]>, text: Option<&str>) -> Self {
        match (file, text) {
            (Some(bytes), _) => Self::from_csv(bytes),
            (None, Some(text)) => Self::from_text(text),
            (None, None) => Submission::Idle,
        }
    }

    pub fn from_csv(bytes: &[u8]) -> Self {
        Self::from(tabular::parse_csv(bytes))
    }

    pub fn from_text(input: &str) -> Self {
        if text::is_blank(input) {
            return Submission::Idle;
        }
        Self::from(text::parse_values(input))
    }

    pub fn sample(&self) -> Option<&EegSample> {
        match self {
            Submission::Valid(sample) => Some(sample),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&InputError> {
        match self {
            Submission::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Result<EegSample, InputError>> for Submission {
    fn from(result: Result<EegSample, InputError>) -> Self {
        match result {
            Ok(sample) => Submission::Valid(sample),
            Err(err) => Submission::Invalid(err),
        }
    }
}
