//! Central Configuration Constants
//!
//! Single source of truth for the epoch shape, decision threshold and
//! artifact defaults. To move the default artifacts, only edit this file.

/// Samples per EEG epoch (one row of the input CSV)
pub const EEG_SAMPLE_COUNT: usize = 178;

/// Channels per timestep in the classifier input tensor
pub const EEG_CHANNELS: usize = 1;

/// Probability at or above which an epoch is labelled as a seizure
pub const DECISION_THRESHOLD: f32 = 0.5;

/// Default classifier artifact (ONNX export of the trained network)
pub const DEFAULT_MODEL_PATH: &str = "models/resnet_eeg_model.onnx";

/// Default scaler artifact (fitted normalization parameters)
pub const DEFAULT_SCALER_PATH: &str = "models/scaler_eeg.json";

/// Default server port
pub const DEFAULT_PORT: u16 = 8501;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default cap on request bodies (uploads and JSON)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Seizure Detection AI";
