//! Request and response shapes shared by the services and the HTTP layer.
//!
//! Field aliases accept the payloads of the older client, which sent
//! `base_language_id`, `wordsList`/`deletedWords` and Go-style
//! `ID`/`TranslateWord`/`LearningLanguageID` keys.

use serde::{Deserialize, Serialize};

use crate::types::{FieldUpdate, LanguageId, TranslationUpdate, Word, WordId};

// ── Submit ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
    #[serde(alias = "base_language_id")]
    pub source_language_id: LanguageId,
    pub learning_language_id: LanguageId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub translated: Vec<Word>,
    pub untranslated: Vec<Word>,
}

impl SubmitResponse {
    pub fn len(&self) -> usize {
        self.translated.len() + self.untranslated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Reconcile ─────────────────────────────────────────────────

/// One edited word from the client.
#[derive(Debug, Clone, Deserialize)]
pub struct WordEdit {
    #[serde(alias = "ID")]
    pub id: WordId,
    #[serde(default, alias = "translate_word", alias = "TranslateWord")]
    pub translation: FieldUpdate<String>,
    #[serde(
        default,
        alias = "learning_language_id",
        alias = "LearningLanguageID"
    )]
    pub target_language_id: FieldUpdate<LanguageId>,
}

impl WordEdit {
    /// Translations are stored as sent; only `null` clears one.
    pub fn into_update(self) -> (WordId, TranslationUpdate) {
        (
            self.id,
            TranslationUpdate {
                translation: self.translation,
                target_language_id: self.target_language_id,
            },
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WordRef {
    #[serde(alias = "ID")]
    pub id: WordId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReconcileRequest {
    #[serde(default, alias = "wordsList")]
    pub updates: Vec<WordEdit>,
    #[serde(default, alias = "deletedWords")]
    pub deletions: Vec<WordRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemAction {
    Delete,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Applied,
    /// Target ID absent. Not a failure for deletions.
    NotFound,
    /// Edit carried no changes.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub id: WordId,
    pub action: ItemAction,
    pub status: ItemStatus,
}

/// Per-item result of a reconcile batch, deletions first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl ReconcileReport {
    pub(crate) fn record(&mut self, id: WordId, action: ItemAction, status: ItemStatus) {
        self.outcomes.push(ItemOutcome { id, action, status });
    }

    pub fn count(&self, action: ItemAction, status: ItemStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.action == action && o.status == status)
            .count()
    }

    pub fn status_of(&self, id: WordId, action: ItemAction) -> Option<ItemStatus> {
        self.outcomes
            .iter()
            .find(|o| o.id == id && o.action == action)
            .map(|o| o.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_accepts_legacy_base_language_key() {
        let req: SubmitRequest = serde_json::from_str(
            r#"{"text": "hola", "base_language_id": 2, "learning_language_id": 1}"#,
        )
        .unwrap();
        assert_eq!(req.source_language_id, LanguageId(2));
    }

    #[test]
    fn reconcile_accepts_legacy_payload() {
        let req: ReconcileRequest = serde_json::from_str(
            r#"{
                "wordsList": [{"ID": 3, "MainWord": "hola", "TranslateWord": "hello", "LearningLanguageID": 1}],
                "deletedWords": [{"ID": 4}]
            }"#,
        )
        .unwrap();
        assert_eq!(req.updates.len(), 1);
        assert_eq!(req.updates[0].id, WordId(3));
        assert_eq!(
            req.updates[0].translation,
            FieldUpdate::Set("hello".to_string())
        );
        assert_eq!(req.deletions[0].id, WordId(4));
    }

    #[test]
    fn reconcile_lists_default_to_empty() {
        let req: ReconcileRequest = serde_json::from_str("{}").unwrap();
        assert!(req.updates.is_empty());
        assert!(req.deletions.is_empty());
    }

    #[test]
    fn blank_translation_is_kept_verbatim() {
        let edit: WordEdit =
            serde_json::from_str(r#"{"id": 1, "translation": "   "}"#).unwrap();
        let (_, update) = edit.into_update();
        assert_eq!(update.translation, FieldUpdate::Set("   ".to_string()));
        assert!(update.target_language_id.is_keep());
    }

    #[test]
    fn null_translation_clears() {
        let edit: WordEdit =
            serde_json::from_str(r#"{"id": 1, "translation": null}"#).unwrap();
        let (_, update) = edit.into_update();
        assert_eq!(update.translation, FieldUpdate::Clear);
    }

    #[test]
    fn omitted_fields_are_noop() {
        let edit: WordEdit = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        let (id, update) = edit.into_update();
        assert_eq!(id, WordId(1));
        assert!(update.is_noop());
    }
}
