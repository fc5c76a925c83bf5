//! Application state management

use database::common::RetryConfig;
use database::postgres::{DatabaseConnection, connect_from_config_with_retry};
use domain_products::InMemoryProductRepository;
use tracing::{info, warn};

use crate::config::{Config, StorageBackend};

/// The product store chosen at startup
#[derive(Clone)]
pub enum Storage {
    Postgres(DatabaseConnection),
    Memory(InMemoryProductRepository),
}

impl Storage {
    /// Opens the configured store, retrying the Postgres connection with backoff.
    pub async fn connect(config: &Config) -> eyre::Result<Self> {
        match (config.storage, &config.database) {
            (StorageBackend::Postgres, Some(database)) => {
                info!(
                    max_connections = database.max_connections,
                    "Connecting to PostgreSQL"
                );
                let db = connect_from_config_with_retry(
                    database.clone(),
                    Some(RetryConfig::new().with_max_retries(5)),
                )
                .await?;
                Ok(Storage::Postgres(db))
            }
            (StorageBackend::Postgres, None) => {
                eyre::bail!("PostgreSQL storage selected but no database configuration loaded")
            }
            (StorageBackend::Memory, _) => {
                warn!("Using in-memory product storage; data is lost on restart");
                Ok(Storage::Memory(InMemoryProductRepository::new()))
            }
        }
    }

    /// Releases storage resources during shutdown.
    pub async fn close(self) {
        match self {
            Storage::Postgres(db) => match db.close().await {
                Ok(()) => info!("PostgreSQL connection pool closed"),
                Err(e) => warn!(error = %e, "Failed to close PostgreSQL connection pool"),
            },
            Storage::Memory(_) => {}
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Storage,
}
