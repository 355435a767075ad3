use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Key under which the cart record is stored.
pub const CART_STORAGE_KEY: &str = "cart";

/// Durable local key-value storage holding the serialized cart.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn save(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
    async fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}
