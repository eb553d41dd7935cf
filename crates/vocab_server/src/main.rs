//! vocab_server: REST server for vocabulary ingestion and reconciliation.
//!
//! See `config` for the environment variables read at startup.

use anyhow::Context;
use tokio::net::TcpListener;
use vocab_core::seeds::seed_default_languages;
use vocab_postgres::PgStores;
use vocab_server::config::ServerConfig;
use vocab_server::router::build_router;
use vocab_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vocab_server=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();

    let state = match &config.database_url {
        Some(url) => {
            let stores = PgStores::connect(url, config.max_connections)
                .await
                .context("failed to connect to database")?;
            tracing::info!("Connected to database");
            AppState::postgres(stores)
        }
        None => {
            tracing::warn!("VOCAB_DATABASE_URL not set, using in-memory store, data will not persist");
            AppState::in_memory()
        }
    };

    seed_default_languages(state.languages.as_ref())
        .await
        .context("failed to seed languages")?;

    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!("vocab_server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
