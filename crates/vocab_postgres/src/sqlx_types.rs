//! Row types decoded by sqlx, converted into vocab_core records.

use sqlx::FromRow;
use vocab_core::types::{Language, LanguageId, Word, WordId};

#[derive(Debug, FromRow)]
pub(crate) struct PgWordRow {
    pub id: i64,
    pub text: String,
    pub source_language_id: i32,
    pub translation: Option<String>,
    pub target_language_id: Option<i32>,
}

impl From<PgWordRow> for Word {
    fn from(r: PgWordRow) -> Self {
        Word {
            id: WordId(r.id),
            text: r.text,
            source_language_id: LanguageId(r.source_language_id),
            translation: r.translation,
            target_language_id: r.target_language_id.map(LanguageId),
        }
    }
}

/// Word row plus whether the upsert inserted it.
#[derive(Debug, FromRow)]
pub(crate) struct PgUpsertRow {
    #[sqlx(flatten)]
    pub word: PgWordRow,
    pub created: bool,
}

#[derive(Debug, FromRow)]
pub(crate) struct PgLanguageRow {
    pub id: i32,
    pub name: String,
    pub flag: String,
}

impl From<PgLanguageRow> for Language {
    fn from(r: PgLanguageRow) -> Self {
        Language {
            id: LanguageId(r.id),
            name: r.name,
            flag: r.flag,
        }
    }
}
