//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::input::InputError;
use crate::model::InferenceError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Input errors (recoverable, shown to the user)
    Input(InputError),

    // Request errors
    NoInput,
    ValidationError(String),

    // Inference errors
    Inference(InferenceError),

    // Generic errors
    InternalError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_)
            | AppError::NoInput
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Inference(_) | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the user
    pub fn public_message(&self) -> String {
        match self {
            AppError::Input(err) => err.to_string(),
            AppError::NoInput => "No EEG input supplied. Upload a CSV or paste 178 values.".to_string(),
            AppError::ValidationError(msg) => msg.clone(),
            AppError::Inference(_) => "Inference failed".to_string(),
            AppError::InternalError(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = match &self {
            AppError::Input(err) => err.kind(),
            AppError::NoInput => "no_input",
            AppError::ValidationError(_) => "validation_error",
            AppError::Inference(err) => {
                tracing::error!("Inference error: {}", err);
                "inference_error"
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "internal_error"
            }
        };

        let body = Json(json!({
            "error": self.public_message(),
            "kind": kind,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        AppError::Input(err)
    }
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::Inference(err)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("inference task failed: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::from(InputError::InvalidCount { found: 3 }).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NoInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::from(InferenceError::OutOfRange(2.0)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_inference_details_stay_private() {
        let err = AppError::from(InferenceError::Run("onnx node 17 exploded".into()));
        assert_eq!(err.public_message(), "Inference failed");
    }
}
