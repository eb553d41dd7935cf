//! vocab_postgres: Postgres adapters for the vocab_core store ports.

mod sqlx_types;
pub mod store;

pub use store::{ensure_schema, PgLanguageStore, PgStores, PgWordStore};
