//! Shared scoring path for the page and the JSON API

use std::sync::Arc;

use uuid::Uuid;

use crate::input::{EegSample, InputError};
use crate::model::{InferenceContext, PredictionResult};
use crate::AppResult;

/// Score one validated epoch off the async runtime.
///
/// The sample is handed back so callers can echo it.
pub async fn score_sample(
    context: Arc<InferenceContext>,
    sample: EegSample,
) -> AppResult<(EegSample, PredictionResult)> {
    let span = tracing::info_span!("analysis", request_id = %Uuid::new_v4());

    let scored = tokio::task::spawn_blocking(move || {
        let _enter = span.enter();
        let result = context.score(&sample);

        match &result {
            Ok(r) => tracing::info!(
                label = ?r.label,
                probability = r.probability,
                latency_us = r.inference_time_us,
                "Epoch scored"
            ),
            Err(e) => tracing::error!("Scoring failed: {}", e),
        }

        result.map(|r| (sample, r))
    })
    .await??;

    Ok(scored)
}

/// Log a rejected submission
pub fn log_rejection(source: &str, err: &InputError) {
    tracing::warn!(source, kind = err.kind(), "Input rejected: {}", err);
}
