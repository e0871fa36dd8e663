//! JSON prediction handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::analysis::{log_rejection, score_sample};
use crate::input::Submission;
use crate::model::PredictionResult;
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct PredictRequest {
    /// CSV body, same rules as the file upload. Wins over `text`.
    #[validate(length(max = 65536))]
    pub csv: Option<String>,

    /// Comma-separated values
    #[validate(length(max = 65536))]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    #[serde(flatten)]
    pub result: PredictionResult,
    pub headline: &'static str,
    pub values: Vec<f32>,
}

pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> AppResult<Json<PredictResponse>> {
    req.validate()?;

    let source = if req.csv.is_some() { "csv" } else { "text" };
    let submission = Submission::from_sources(
        req.csv.as_deref().map(str::as_bytes),
        req.text.as_deref(),
    );

    let sample = match submission {
        Submission::Idle => return Err(AppError::NoInput),
        Submission::Invalid(err) => {
            log_rejection(source, &err);
            return Err(err.into());
        }
        Submission::Valid(sample) => sample,
    };

    let (sample, result) = score_sample(state.context.clone(), sample).await?;

    Ok(Json(PredictResponse {
        headline: result.label.headline(),
        result,
        values: sample.into_values(),
    }))
}
