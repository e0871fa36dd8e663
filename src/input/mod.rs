//! Input Module - Epoch acquisition & validation
//!
//! Turns one of the two input sources (uploaded CSV or pasted text) into a
//! validated [`EegSample`], or a reason it was rejected.
//!
//! - `sample` - the fixed-length epoch type
//! - `text` - comma-delimited free text
//! - `tabular` - headerless CSV upload
//! - `submission` - three-state outcome of one request

pub mod sample;
pub mod text;
pub mod tabular;
pub mod submission;


// Re-export common types
pub use sample::EegSample;
pub use submission::Submission;

use crate::constants::EEG_SAMPLE_COUNT;

/// Reasons an input is rejected before inference.
///
/// All variants are recoverable: the caller shows the message and waits for
/// the next submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// Uploaded file is not a single row of 178 columns
    #[error("Invalid input shape: ({rows}, {columns}). Expected 1 x {expected} CSV.", expected = EEG_SAMPLE_COUNT)]
    InvalidShape { rows: usize, columns: usize },

    /// Pasted text does not hold exactly 178 values
    #[error("You must enter exactly {expected} values (got {found}).", expected = EEG_SAMPLE_COUNT)]
    InvalidCount { found: usize },

    /// A token is not a finite floating point number
    #[error("Invalid numbers. Check your input ('{token}' is not a number).")]
    Parse { token: String },

    /// The upload could not be read as CSV at all
    #[error("Could not read CSV file: {0}")]
    Malformed(String),
}

impl InputError {
    /// Stable machine-readable tag
    pub fn kind(&self) -> &'static str {
        match self {
            InputError::InvalidShape { .. } => "invalid_shape",
            InputError::InvalidCount { .. } => "invalid_count",
            InputError::Parse { .. } => "parse_error",
            InputError::Malformed(_) => "malformed_csv",
        }
    }
}
