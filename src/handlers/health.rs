//! Liveness probe. The context only exists once both artifacts loaded, so
//! answering at all means the classifier is ready.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::{APP_NAME, APP_VERSION};
use crate::AppState;

#[derive(Serialize)]
pub struct Liveness {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    engine: String,
    scaler_kind: String,
    uptime_secs: i64,
    timestamp: DateTime<Utc>,
}

pub async fn check(State(state): State<AppState>) -> Json<Liveness> {
    let model = state.context.status();
    let now = Utc::now();

    Json(Liveness {
        status: "healthy",
        service: APP_NAME,
        version: APP_VERSION,
        engine: model.inference_device,
        scaler_kind: model.scaler_kind,
        uptime_secs: (now - model.loaded_at).num_seconds().max(0),
        timestamp: now,
    })
}
