//! Model status handler

use axum::{extract::State, Json};

use crate::model::ModelStatus;
use crate::AppState;

pub async fn get(State(state): State<AppState>) -> Json<ModelStatus> {
    Json(state.context.status())
}
