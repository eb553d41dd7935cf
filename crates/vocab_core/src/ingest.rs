//! IngestionService: text in, partitioned vocabulary out.

use std::sync::Arc;

use crate::error::VocabError;
use crate::ports::{Result, WordStore};
use crate::proto::{SubmitRequest, SubmitResponse};
use crate::tokenizer::tokenize;
use crate::types::{LanguageId, NewWord};

pub struct IngestionService {
    words: Arc<dyn WordStore>,
}

impl IngestionService {
    pub fn new(words: Arc<dyn WordStore>) -> Self {
        Self { words }
    }

    /// Tokenize `req.text`, persist unseen tokens for the source language and
    /// return every token's word split by translation status.
    ///
    /// Re-submitting the same text creates nothing new; the split reflects
    /// the translations stored now, not at creation time.
    pub async fn submit(&self, req: &SubmitRequest) -> Result<SubmitResponse> {
        check_language("source_language_id", req.source_language_id)?;
        check_language("learning_language_id", req.learning_language_id)?;
        if req.text.contains('\0') {
            return Err(VocabError::MalformedInput(
                "text must not contain NUL characters".into(),
            ));
        }

        let tokens = tokenize(&req.text);
        let mut resp = SubmitResponse::default();
        let mut created = 0usize;

        for token in tokens {
            let (word, inserted) = self
                .words
                .get_or_create(NewWord::untranslated(
                    token,
                    req.source_language_id,
                    req.learning_language_id,
                ))
                .await?;
            if inserted {
                created += 1;
            }
            if word.is_translated() {
                resp.translated.push(word);
            } else {
                resp.untranslated.push(word);
            }
        }

        tracing::debug!(
            "submit lang={} tokens={} created={} translated={}",
            req.source_language_id,
            resp.len(),
            created,
            resp.translated.len()
        );
        Ok(resp)
    }
}

fn check_language(field: &str, id: LanguageId) -> Result<()> {
    if id.0 <= 0 {
        return Err(VocabError::MalformedInput(format!(
            "{field} must be a positive id, got {id}"
        )));
    }
    Ok(())
}
