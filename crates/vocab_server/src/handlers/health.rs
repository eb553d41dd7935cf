//! GET /health: liveness plus a store round-trip.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let languages = state.languages.count_languages().await?;
    Ok(Json(json!({ "status": "ok", "languages": languages })))
}
