//! Server configuration from environment variables.
//!
//!   VOCAB_DATABASE_URL: Postgres connection string (unset: in-memory store)
//!   VOCAB_BIND_ADDR: listen address (default: 0.0.0.0:3000)
//!   VOCAB_DB_MAX_CONNECTIONS: pool size (default: 10)

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = lookup("VOCAB_DATABASE_URL").filter(|v| !v.trim().is_empty());
        let bind_addr = lookup("VOCAB_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let max_connections = match lookup("VOCAB_DB_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    tracing::warn!(
                        "Ignoring VOCAB_DB_MAX_CONNECTIONS={raw:?}, using {DEFAULT_MAX_CONNECTIONS}"
                    );
                    DEFAULT_MAX_CONNECTIONS
                }
            },
        };

        Self {
            database_url,
            bind_addr,
            max_connections,
        }
    }
}
