//! Domain records: words, languages and the tri-state field update.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned surrogate key of a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub i64);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Surrogate key of a [`Language`]. Opaque to the core, never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(pub i32);

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted vocabulary entry, unique on (`text`, `source_language_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub source_language_id: LanguageId,
    pub translation: Option<String>,
    pub target_language_id: Option<LanguageId>,
}

impl Word {
    /// Translation presence is the only status signal; there is no flag.
    pub fn is_translated(&self) -> bool {
        self.translation.is_some()
    }
}

/// A word not yet persisted. The store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWord {
    pub text: String,
    pub source_language_id: LanguageId,
    pub target_language_id: Option<LanguageId>,
}

impl NewWord {
    pub fn untranslated(
        text: impl Into<String>,
        source_language_id: LanguageId,
        target_language_id: LanguageId,
    ) -> Self {
        Self {
            text: text.into(),
            source_language_id,
            target_language_id: Some(target_language_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: LanguageId,
    pub name: String,
    pub flag: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLanguage {
    pub name: String,
    pub flag: String,
}

// ── FieldUpdate ───────────────────────────────────────────────

/// Change to apply to one optional column.
///
/// On the wire an omitted field is `Keep`, an explicit `null` is `Clear`
/// and a value is `Set`. Fields using it need `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Keep,
    Clear,
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> FieldUpdate<T> {
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Keep => current,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldUpdate<U> {
        match self {
            Self::Keep => FieldUpdate::Keep,
            Self::Clear => FieldUpdate::Clear,
            Self::Set(value) => FieldUpdate::Set(f(value)),
        }
    }
}

impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Set(value),
            None => Self::Clear,
        })
    }
}

/// Translation columns to change on an existing word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationUpdate {
    pub translation: FieldUpdate<String>,
    pub target_language_id: FieldUpdate<LanguageId>,
}

impl TranslationUpdate {
    pub fn is_noop(&self) -> bool {
        self.translation.is_keep() && self.target_language_id.is_keep()
    }

    /// Apply to a word in place. Used by stores without a query language.
    pub fn apply_to(self, word: &mut Word) {
        word.translation = self.translation.apply(word.translation.take());
        word.target_language_id = self.target_language_id.apply(word.target_language_id);
    }
}
