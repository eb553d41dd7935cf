use std::sync::Arc;

use vocab_core::memory::MemoryStore;
use vocab_core::ports::{LanguageStore, WordStore};
use vocab_core::{IngestionService, ReconciliationService};
use vocab_postgres::PgStores;

/// Shared handler state. Every service holds the same store handles.
#[derive(Clone)]
pub struct AppState {
    pub ingestion: Arc<IngestionService>,
    pub reconciliation: Arc<ReconciliationService>,
    pub words: Arc<dyn WordStore>,
    pub languages: Arc<dyn LanguageStore>,
}

impl AppState {
    pub fn new(words: Arc<dyn WordStore>, languages: Arc<dyn LanguageStore>) -> Self {
        Self {
            ingestion: Arc::new(IngestionService::new(Arc::clone(&words))),
            reconciliation: Arc::new(ReconciliationService::new(Arc::clone(&words))),
            words,
            languages,
        }
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store)
    }

    pub fn postgres(stores: PgStores) -> Self {
        Self::new(Arc::new(stores.words), Arc::new(stores.languages))
    }
}
