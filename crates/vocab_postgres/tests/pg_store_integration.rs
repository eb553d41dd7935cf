//! Postgres adapter integration tests.
//!
//! Requires a running PostgreSQL database. Each test works inside its own
//! source language id so runs do not collide.
//! Run with: DATABASE_URL="postgresql:///vocab_test" cargo test -p vocab_postgres --test pg_store_integration -- --ignored --nocapture

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use vocab_core::ports::{LanguageStore, WordStore};
use vocab_core::proto::{ReconcileRequest, SubmitRequest, WordEdit, WordRef};
use vocab_core::seeds::seed_default_languages;
use vocab_core::types::*;
use vocab_core::{IngestionService, ReconciliationService};
use vocab_postgres::PgStores;

async fn stores() -> PgStores {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    PgStores::connect(&url, 5)
        .await
        .expect("failed to connect to test database")
}

/// A source language id no other run has used.
fn fresh_language() -> LanguageId {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    LanguageId(1_000_000 + (nanos % 1_000_000_000) as i32)
}

#[tokio::test]
#[ignore]
async fn duplicate_create_is_constraint_violation() {
    let stores = stores().await;
    let lang = fresh_language();
    stores
        .words
        .create(NewWord::untranslated("casa", lang, LanguageId(1)))
        .await
        .unwrap();
    let err = stores
        .words
        .create(NewWord::untranslated("casa", lang, LanguageId(1)))
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation(), "got {err}");
}

#[tokio::test]
#[ignore]
async fn upsert_creates_once() {
    let stores = stores().await;
    let lang = fresh_language();
    let (a, created_a) = stores
        .words
        .get_or_create(NewWord::untranslated("perro", lang, LanguageId(1)))
        .await
        .unwrap();
    let (b, created_b) = stores
        .words
        .get_or_create(NewWord::untranslated("perro", lang, LanguageId(1)))
        .await
        .unwrap();
    assert!(created_a);
    assert!(!created_b);
    assert_eq!(a.id, b.id);
    assert_eq!(stores.words.count_by_source_language(lang).await.unwrap(), 1);
}

#[tokio::test]
#[ignore]
async fn update_keep_clear_set() {
    let stores = stores().await;
    let lang = fresh_language();
    let w = stores
        .words
        .create(NewWord::untranslated("gato", lang, LanguageId(1)))
        .await
        .unwrap();

    let set = stores
        .words
        .update_translation(
            w.id,
            TranslationUpdate {
                translation: FieldUpdate::Set("cat".into()),
                target_language_id: FieldUpdate::Keep,
            },
        )
        .await
        .unwrap();
    assert_eq!(set.translation.as_deref(), Some("cat"));
    assert_eq!(set.target_language_id, Some(LanguageId(1)));

    let kept = stores
        .words
        .update_translation(
            w.id,
            TranslationUpdate {
                translation: FieldUpdate::Keep,
                target_language_id: FieldUpdate::Set(LanguageId(3)),
            },
        )
        .await
        .unwrap();
    assert_eq!(kept.translation.as_deref(), Some("cat"));
    assert_eq!(kept.target_language_id, Some(LanguageId(3)));

    let cleared = stores
        .words
        .update_translation(
            w.id,
            TranslationUpdate {
                translation: FieldUpdate::Clear,
                target_language_id: FieldUpdate::Clear,
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.translation, None);
    assert_eq!(cleared.target_language_id, None);
}

#[tokio::test]
#[ignore]
async fn missing_ids_are_not_found() {
    let stores = stores().await;
    assert!(stores.words.delete(WordId(-1)).await.unwrap_err().is_not_found());
    assert!(stores
        .words
        .update_translation(WordId(-1), TranslationUpdate::default())
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
#[ignore]
async fn concurrent_submissions_respect_unique_key() {
    let stores = stores().await;
    let lang = fresh_language();
    let words: Arc<dyn WordStore> = Arc::new(stores.words);
    let svc = Arc::new(IngestionService::new(Arc::clone(&words)));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let svc = Arc::clone(&svc);
        handles.push(tokio::spawn(async move {
            svc.submit(&SubmitRequest {
                text: "sol luna sol estrella".into(),
                source_language_id: lang,
                learning_language_id: LanguageId(1),
            })
            .await
        }));
    }
    for h in handles {
        assert_eq!(h.await.unwrap().unwrap().untranslated.len(), 3);
    }
    assert_eq!(words.count_by_source_language(lang).await.unwrap(), 3);
}

#[tokio::test]
#[ignore]
async fn reconcile_round_trip() {
    let stores = stores().await;
    let lang = fresh_language();
    let words: Arc<dyn WordStore> = Arc::new(stores.words);
    let ingest = IngestionService::new(Arc::clone(&words));
    let reconcile = ReconciliationService::new(Arc::clone(&words));
    let req = SubmitRequest {
        text: "hola mundo hola".into(),
        source_language_id: lang,
        learning_language_id: LanguageId(2),
    };

    let first = ingest.submit(&req).await.unwrap();
    let hola = first.untranslated.iter().find(|w| w.text == "hola").unwrap().id;
    let mundo = first.untranslated.iter().find(|w| w.text == "mundo").unwrap().id;

    reconcile
        .reconcile(ReconcileRequest {
            updates: vec![
                WordEdit {
                    id: mundo,
                    translation: FieldUpdate::Set("world".into()),
                    target_language_id: FieldUpdate::Keep,
                },
                WordEdit {
                    id: hola,
                    translation: FieldUpdate::Set("hello".into()),
                    target_language_id: FieldUpdate::Keep,
                },
            ],
            deletions: vec![WordRef { id: mundo }],
        })
        .await
        .unwrap();

    let second = ingest.submit(&req).await.unwrap();
    assert_eq!(second.translated.len(), 1);
    assert_eq!(second.translated[0].id, hola);
    assert_eq!(second.untranslated.len(), 1);
    assert_ne!(second.untranslated[0].id, mundo);
}

#[tokio::test]
#[ignore]
async fn seeding_is_idempotent() {
    let stores = stores().await;
    seed_default_languages(&stores.languages).await.unwrap();
    let count = stores.languages.count_languages().await.unwrap();
    assert!(count >= 9);
    assert_eq!(seed_default_languages(&stores.languages).await.unwrap(), 0);
    assert_eq!(stores.languages.list_languages().await.unwrap().len() as u64, count);
}

#[tokio::test]
#[ignore]
async fn nul_in_text_is_malformed_input() {
    let stores = stores().await;
    let err = stores
        .words
        .create(NewWord::untranslated("mu\0ndo", fresh_language(), LanguageId(1)))
        .await
        .unwrap_err();
    assert!(
        matches!(err, vocab_core::VocabError::MalformedInput(_)),
        "got {err}"
    );
}
