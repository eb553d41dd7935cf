//! POST /filledwords (alias /reconcile): apply translations and deletions.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use vocab_core::proto::{ItemOutcome, ReconcileRequest};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReconcileResponse {
    pub status: &'static str,
    pub message: String,
    pub outcomes: Vec<ItemOutcome>,
}

pub async fn reconcile(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> Result<Json<ReconcileResponse>, AppError> {
    let Json(req) = payload?;
    let (updates, deletions) = (req.updates.len(), req.deletions.len());
    let report = state.reconciliation.reconcile(req).await?;
    Ok(Json(ReconcileResponse {
        status: "success",
        message: format!("{updates} update(s) and {deletions} deletion(s) processed"),
        outcomes: report.outcomes,
    }))
}
