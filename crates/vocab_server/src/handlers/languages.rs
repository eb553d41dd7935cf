//! GET /languages: the seeded language catalog.

use axum::extract::State;
use axum::Json;
use vocab_core::types::Language;

use crate::error::AppError;
use crate::state::AppState;

pub async fn list_languages(State(state): State<AppState>) -> Result<Json<Vec<Language>>, AppError> {
    Ok(Json(state.languages.list_languages().await?))
}
