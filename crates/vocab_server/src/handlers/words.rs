//! Word handlers.
//!
//! POST /submit: tokenize text, store unseen words, return the partition
//! GET  /words: every stored word

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use vocab_core::proto::{SubmitRequest, SubmitResponse};
use vocab_core::types::Word;

use crate::error::AppError;
use crate::state::AppState;

pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let Json(req) = payload?;
    Ok(Json(state.ingestion.submit(&req).await?))
}

pub async fn list_words(State(state): State<AppState>) -> Result<Json<Vec<Word>>, AppError> {
    Ok(Json(state.words.list_all().await?))
}
