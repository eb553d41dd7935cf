//! In-memory store.
//!
//! Backs the server when no database URL is configured, and every test
//! that does not need Postgres. Uniqueness is enforced through a key index
//! under the same write lock as the rows.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::VocabError;
use crate::ports::{LanguageStore, Result, WordStore};
use crate::types::*;

#[derive(Default)]
struct WordTable {
    next_id: i64,
    rows: BTreeMap<WordId, Word>,
    by_key: HashMap<(String, LanguageId), WordId>,
}

#[derive(Default)]
struct LanguageTable {
    next_id: i32,
    rows: BTreeMap<LanguageId, Language>,
}

/// `WordStore` and `LanguageStore` over `tokio::sync::RwLock` maps.
#[derive(Default)]
pub struct MemoryStore {
    words: RwLock<WordTable>,
    languages: RwLock<LanguageTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WordStore for MemoryStore {
    async fn find_by_text_and_language(
        &self,
        text: &str,
        source_language_id: LanguageId,
    ) -> Result<Option<Word>> {
        let table = self.words.read().await;
        Ok(table
            .by_key
            .get(&(text.to_owned(), source_language_id))
            .and_then(|id| table.rows.get(id))
            .cloned())
    }

    async fn create(&self, word: NewWord) -> Result<Word> {
        let mut table = self.words.write().await;
        let key = (word.text.clone(), word.source_language_id);
        if table.by_key.contains_key(&key) {
            return Err(VocabError::ConstraintViolation(format!(
                "word '{}' already exists for language {}",
                word.text, word.source_language_id
            )));
        }

        table.next_id += 1;
        let id = WordId(table.next_id);
        let row = Word {
            id,
            text: word.text,
            source_language_id: word.source_language_id,
            translation: None,
            target_language_id: word.target_language_id,
        };
        table.by_key.insert(key, id);
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update_translation(&self, id: WordId, update: TranslationUpdate) -> Result<Word> {
        let mut table = self.words.write().await;
        let row = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| VocabError::NotFound(format!("word {id}")))?;
        update.apply_to(row);
        Ok(row.clone())
    }

    async fn delete(&self, id: WordId) -> Result<()> {
        let mut table = self.words.write().await;
        let row = table
            .rows
            .remove(&id)
            .ok_or_else(|| VocabError::NotFound(format!("word {id}")))?;
        table.by_key.remove(&(row.text, row.source_language_id));
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Word>> {
        Ok(self.words.read().await.rows.values().cloned().collect())
    }

    async fn count_by_source_language(&self, source_language_id: LanguageId) -> Result<u64> {
        let table = self.words.read().await;
        Ok(table
            .rows
            .values()
            .filter(|w| w.source_language_id == source_language_id)
            .count() as u64)
    }
}

#[async_trait]
impl LanguageStore for MemoryStore {
    async fn list_languages(&self) -> Result<Vec<Language>> {
        Ok(self.languages.read().await.rows.values().cloned().collect())
    }

    async fn count_languages(&self) -> Result<u64> {
        Ok(self.languages.read().await.rows.len() as u64)
    }

    async fn insert_languages(&self, languages: &[NewLanguage]) -> Result<()> {
        let mut table = self.languages.write().await;
        for lang in languages {
            table.next_id += 1;
            let id = LanguageId(table.next_id);
            table.rows.insert(
                id,
                Language {
                    id,
                    name: lang.name.clone(),
                    flag: lang.flag.clone(),
                },
            );
        }
        Ok(())
    }
}
