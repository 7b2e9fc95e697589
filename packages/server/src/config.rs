use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Which storage gateway backs the job service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    /// Process-local store, for development without a database.
    Memory,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub selection_timeout: Duration,
    pub health_probe_interval: Duration,
    pub store: StoreKind,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let store = parse_store_kind(
            &env::var("JOB_BOARD_STORE").unwrap_or_else(|_| "postgres".to_string()),
        )?;
        let database_url = match store {
            StoreKind::Postgres => env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            StoreKind::Memory => env::var("DATABASE_URL").unwrap_or_default(),
        };

        Ok(Self {
            database_url,
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            selection_timeout: Duration::from_millis(
                env::var("DATABASE_SELECTION_TIMEOUT_MS")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .context("DATABASE_SELECTION_TIMEOUT_MS must be a valid number")?,
            ),
            health_probe_interval: Duration::from_secs(
                env::var("HEALTH_PROBE_INTERVAL_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("HEALTH_PROBE_INTERVAL_SECS must be a valid number")?,
            ),
            store,
        })
    }
}

fn parse_store_kind(value: &str) -> Result<StoreKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "postgres" => Ok(StoreKind::Postgres),
        "memory" => Ok(StoreKind::Memory),
        other => bail!("JOB_BOARD_STORE must be 'postgres' or 'memory', got '{}'", other),
    }
}
