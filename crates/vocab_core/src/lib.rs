//! vocab_core: word ingestion and translation reconciliation.
//!
//! Pure domain logic. Persistence is reached only through the port traits in
//! [`ports`]; `vocab_postgres` and [`memory::MemoryStore`] implement them.

pub mod error;
pub mod ingest;
pub mod memory;
pub mod ports;
pub mod proto;
pub mod reconcile;
pub mod seeds;
pub mod tokenizer;
pub mod types;

pub use error::VocabError;
pub use ingest::IngestionService;
pub use reconcile::ReconciliationService;
