use std::env;
use std::sync::Arc;

use business::domain::cart::repository::CartStore;
use persistence::cart::memory::InMemoryCartStore;
use persistence::cart::repository::CartStoreSqlite;
use persistence::db::{DatabaseConfig, create_sqlite_pool, ensure_schema};

/// Where the cart record is kept.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Sqlite { database_url: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

impl StorageConfig {
    /// Environment variables:
    /// - CART_STORAGE: "sqlite" or "memory" (default: "sqlite")
    /// - CART_DATABASE_URL: SQLite connection string
    ///   (default: "sqlite://cart.db?mode=rwc")
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend = match lookup("CART_STORAGE").as_deref().map(str::trim) {
            Some("memory") => StorageBackend::Memory,
            _ => StorageBackend::Sqlite {
                database_url: lookup("CART_DATABASE_URL")
                    .unwrap_or_else(|| "sqlite://cart.db?mode=rwc".to_string()),
            },
        };

        Self { backend }
    }
}

/// Opens the configured cart store, creating the SQLite table when needed
pub async fn init_cart_store(config: &StorageConfig) -> anyhow::Result<Arc<dyn CartStore>> {
    match &config.backend {
        StorageBackend::Memory => {
            tracing::warn!("Cart storage is in memory, the cart will not survive a restart");
            Ok(Arc::new(InMemoryCartStore::new()))
        }
        StorageBackend::Sqlite { database_url } => {
            let pool = create_sqlite_pool(&DatabaseConfig::new(database_url.clone())).await?;
            ensure_schema(&pool).await?;
            Ok(Arc::new(CartStoreSqlite::new(pool)))
        }
    }
}
