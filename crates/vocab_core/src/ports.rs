//! Storage port traits.
//! Implemented by vocab_postgres and [`crate::memory::MemoryStore`]: core logic depends only on these traits.

use async_trait::async_trait;

use crate::error::VocabError;
use crate::types::*;

pub type Result<T> = std::result::Result<T, VocabError>;

/// Persistence for [`Word`] records.
///
/// Implementations must enforce uniqueness of (`text`, `source_language_id`)
/// and report a breach as [`VocabError::ConstraintViolation`].
#[async_trait]
pub trait WordStore: Send + Sync {
    async fn find_by_text_and_language(
        &self,
        text: &str,
        source_language_id: LanguageId,
    ) -> Result<Option<Word>>;

    /// Insert a new word. Fails with `ConstraintViolation` on a duplicate key.
    async fn create(&self, word: NewWord) -> Result<Word>;

    /// Return the existing word for the key, creating it if absent.
    /// The flag is `true` when this call inserted the row.
    ///
    /// The default is find, then create, then re-read if a concurrent
    /// writer won the insert. Backends with an upsert should override it.
    async fn get_or_create(&self, word: NewWord) -> Result<(Word, bool)> {
        if let Some(existing) = self
            .find_by_text_and_language(&word.text, word.source_language_id)
            .await?
        {
            return Ok((existing, false));
        }

        let text = word.text.clone();
        let source_language_id = word.source_language_id;
        match self.create(word).await {
            Ok(created) => Ok((created, true)),
            Err(e) if e.is_constraint_violation() => {
                tracing::debug!("Lost create race for '{text}' ({source_language_id}), re-reading");
                self.find_by_text_and_language(&text, source_language_id)
                    .await?
                    .map(|w| (w, false))
                    .ok_or_else(|| {
                        VocabError::StoreUnavailable(anyhow::anyhow!(
                            "word '{text}' vanished after constraint violation"
                        ))
                    })
            }
            Err(e) => Err(e),
        }
    }

    /// Fails with `NotFound` if no word has this ID.
    async fn update_translation(&self, id: WordId, update: TranslationUpdate) -> Result<Word>;

    /// Fails with `NotFound` if no word has this ID.
    async fn delete(&self, id: WordId) -> Result<()>;

    /// All words, ordered by ID.
    async fn list_all(&self) -> Result<Vec<Word>>;

    async fn count_by_source_language(&self, source_language_id: LanguageId) -> Result<u64>;
}

/// Read access to the language catalog, plus the bulk insert used by seeding.
#[async_trait]
pub trait LanguageStore: Send + Sync {
    /// All languages, ordered by ID.
    async fn list_languages(&self) -> Result<Vec<Language>>;

    async fn count_languages(&self) -> Result<u64>;

    async fn insert_languages(&self, languages: &[NewLanguage]) -> Result<()>;
}
