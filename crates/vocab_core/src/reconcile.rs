//! ReconciliationService: applies a client's batch of edits and deletions.
//!
//! Deletions run before updates. Each item stands alone: a missing ID is
//! recorded in the report and the batch carries on. Only a store failure
//! aborts the batch, leaving already-applied items in place.

use std::sync::Arc;

use crate::ports::{Result, WordStore};
use crate::proto::{ItemAction, ItemStatus, ReconcileReport, ReconcileRequest};

pub struct ReconciliationService {
    words: Arc<dyn WordStore>,
}

impl ReconciliationService {
    pub fn new(words: Arc<dyn WordStore>) -> Self {
        Self { words }
    }

    pub async fn reconcile(&self, req: ReconcileRequest) -> Result<ReconcileReport> {
        let mut report = ReconcileReport::default();

        for word_ref in &req.deletions {
            let status = match self.words.delete(word_ref.id).await {
                Ok(()) => ItemStatus::Applied,
                Err(e) if e.is_not_found() => {
                    tracing::debug!("delete skipped, word {} already absent", word_ref.id);
                    ItemStatus::NotFound
                }
                Err(e) => {
                    tracing::error!("delete of word {} failed: {e}", word_ref.id);
                    return Err(e);
                }
            };
            report.record(word_ref.id, ItemAction::Delete, status);
        }

        for edit in req.updates {
            let (id, update) = edit.into_update();
            let noop = update.is_noop();
            let status = match self.words.update_translation(id, update).await {
                Ok(_) if noop => ItemStatus::Unchanged,
                Ok(_) => ItemStatus::Applied,
                Err(e) if e.is_not_found() => {
                    tracing::debug!("update skipped, word {id} not found");
                    ItemStatus::NotFound
                }
                Err(e) => {
                    tracing::error!("update of word {id} failed: {e}");
                    return Err(e);
                }
            };
            report.record(id, ItemAction::Update, status);
        }

        tracing::info!(
            "reconciled deletions={}/{} updates={}/{}",
            report.count(ItemAction::Delete, ItemStatus::Applied),
            req.deletions.len(),
            report.count(ItemAction::Update, ItemStatus::Applied),
            report.outcomes.len() - req.deletions.len(),
        );
        Ok(report)
    }
}
