use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::cart::repository::CartStore;
use business::domain::errors::RepositoryError;

/// Process-local store; the cart does not survive a restart.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    records: RwLock<HashMap<String, String>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn load(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.records
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        self.records.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_round_trip_records() {
        let store = InMemoryCartStore::new();

        store.save("cart", "[1]").await.unwrap();
        assert_eq!(store.load("cart").await.unwrap().as_deref(), Some("[1]"));

        store.remove("cart").await.unwrap();
        assert!(store.load("cart").await.unwrap().is_none());
    }
}
