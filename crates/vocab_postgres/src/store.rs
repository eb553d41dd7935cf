//! Postgres implementations of the vocab_core port traits.
//!
//! One adapter per port, each owning a clone of the same pool. Queries are
//! built at runtime with `sqlx::query_as`, so building this crate never
//! needs a live database.

use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use vocab_core::error::VocabError;
use vocab_core::ports::{LanguageStore, Result, WordStore};
use vocab_core::types::*;

use crate::sqlx_types::{PgLanguageRow, PgUpsertRow, PgWordRow};

const SCHEMA: &str = include_str!("../migrations/001_vocab.sql");

const WORD_COLUMNS: &str = "id, text, source_language_id, translation, target_language_id";

/// SQLSTATE for byte sequences the server encoding cannot hold (e.g. NUL).
const CHARACTER_NOT_IN_REPERTOIRE: &str = "22021";

/// Unique violations become `ConstraintViolation` and unstorable text becomes
/// `MalformedInput`; everything else means the database could not serve the
/// request.
fn map_err(e: sqlx::Error) -> VocabError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return VocabError::ConstraintViolation(db.message().to_owned());
        }
        if db.code().as_deref() == Some(CHARACTER_NOT_IN_REPERTOIRE) {
            return VocabError::MalformedInput(db.message().to_owned());
        }
    }
    VocabError::StoreUnavailable(anyhow!(e))
}

/// Create the tables if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::raw_sql(SCHEMA).execute(pool).await.map_err(map_err)?;
    tracing::debug!("Vocabulary schema ensured");
    Ok(())
}

// ── PgStores ──────────────────────────────────────────────────

/// All adapters over one pool.
pub struct PgStores {
    pub words: PgWordStore,
    pub languages: PgLanguageStore,
}

impl PgStores {
    pub fn new(pool: PgPool) -> Self {
        Self {
            words: PgWordStore::new(pool.clone()),
            languages: PgLanguageStore::new(pool),
        }
    }

    /// Connect a pool and apply the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(map_err)?;
        ensure_schema(&pool).await?;
        Ok(Self::new(pool))
    }
}

// ── PgWordStore ───────────────────────────────────────────────

pub struct PgWordStore {
    pool: PgPool,
}

impl PgWordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WordStore for PgWordStore {
    async fn find_by_text_and_language(
        &self,
        text: &str,
        source_language_id: LanguageId,
    ) -> Result<Option<Word>> {
        let row = sqlx::query_as::<_, PgWordRow>(&format!(
            "SELECT {WORD_COLUMNS} FROM words WHERE text = $1 AND source_language_id = $2"
        ))
        .bind(text)
        .bind(source_language_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(row.map(Word::from))
    }

    async fn create(&self, word: NewWord) -> Result<Word> {
        let row = sqlx::query_as::<_, PgWordRow>(&format!(
            r#"
            INSERT INTO words (text, source_language_id, target_language_id)
            VALUES ($1, $2, $3)
            RETURNING {WORD_COLUMNS}
            "#
        ))
        .bind(&word.text)
        .bind(word.source_language_id.0)
        .bind(word.target_language_id.map(|l| l.0))
        .fetch_one(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(row.into())
    }

    /// Single-statement upsert. When a concurrent transaction commits the
    /// same key mid-statement neither branch sees a row, so fall back to a
    /// fresh read.
    async fn get_or_create(&self, word: NewWord) -> Result<(Word, bool)> {
        let row = sqlx::query_as::<_, PgUpsertRow>(&format!(
            r#"
            WITH ins AS (
                INSERT INTO words (text, source_language_id, target_language_id)
                VALUES ($1, $2, $3)
                ON CONFLICT (text, source_language_id) DO NOTHING
                RETURNING {WORD_COLUMNS}
            )
            SELECT {WORD_COLUMNS}, TRUE AS created FROM ins
            UNION ALL
            SELECT {WORD_COLUMNS}, FALSE AS created FROM words
            WHERE text = $1 AND source_language_id = $2
            LIMIT 1
            "#
        ))
        .bind(&word.text)
        .bind(word.source_language_id.0)
        .bind(word.target_language_id.map(|l| l.0))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_err)?;

        if let Some(r) = row {
            return Ok((r.word.into(), r.created));
        }

        self.find_by_text_and_language(&word.text, word.source_language_id)
            .await?
            .map(|w| (w, false))
            .ok_or_else(|| {
                VocabError::StoreUnavailable(anyhow!(
                    "upsert of '{}' returned no row and none is visible",
                    word.text
                ))
            })
    }

    async fn update_translation(&self, id: WordId, update: TranslationUpdate) -> Result<Word> {
        let set_translation = !update.translation.is_keep();
        let set_target = !update.target_language_id.is_keep();
        let translation = update.translation.apply(None);
        let target = update.target_language_id.map(|l| l.0).apply(None);

        let row = sqlx::query_as::<_, PgWordRow>(&format!(
            r#"
            UPDATE words SET
                translation = CASE WHEN $2 THEN $3 ELSE translation END,
                target_language_id = CASE WHEN $4 THEN $5 ELSE target_language_id END
            WHERE id = $1
            RETURNING {WORD_COLUMNS}
            "#
        ))
        .bind(id.0)
        .bind(set_translation)
        .bind(translation)
        .bind(set_target)
        .bind(target)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_err)?;

        row.map(Word::from)
            .ok_or_else(|| VocabError::NotFound(format!("word {id}")))
    }

    async fn delete(&self, id: WordId) -> Result<()> {
        let affected = sqlx::query("DELETE FROM words WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_err)?
            .rows_affected();
        if affected == 0 {
            return Err(VocabError::NotFound(format!("word {id}")));
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Word>> {
        let rows = sqlx::query_as::<_, PgWordRow>(&format!(
            "SELECT {WORD_COLUMNS} FROM words ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(rows.into_iter().map(Word::from).collect())
    }

    async fn count_by_source_language(&self, source_language_id: LanguageId) -> Result<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM words WHERE source_language_id = $1",
        )
        .bind(source_language_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(count as u64)
    }
}

// ── PgLanguageStore ───────────────────────────────────────────

pub struct PgLanguageStore {
    pool: PgPool,
}

impl PgLanguageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LanguageStore for PgLanguageStore {
    async fn list_languages(&self) -> Result<Vec<Language>> {
        let rows =
            sqlx::query_as::<_, PgLanguageRow>("SELECT id, name, flag FROM languages ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_err)?;
        Ok(rows.into_iter().map(Language::from).collect())
    }

    async fn count_languages(&self) -> Result<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM languages")
            .fetch_one(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(count as u64)
    }

    async fn insert_languages(&self, languages: &[NewLanguage]) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(map_err)?;
        for lang in languages {
            sqlx::query("INSERT INTO languages (name, flag) VALUES ($1, $2)")
                .bind(&lang.name)
                .bind(&lang.flag)
                .execute(&mut *tx)
                .await
                .map_err(map_err)?;
        }
        tx.commit().await.map_err(map_err)?;
        Ok(())
    }
}
