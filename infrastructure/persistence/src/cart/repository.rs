use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use business::domain::cart::repository::CartStore;
use business::domain::errors::RepositoryError;

use super::entity::KeyValueEntity;

/// Cart record kept in the local `kv_store` SQLite table.
pub struct CartStoreSqlite {
    pool: SqlitePool,
}

impl CartStoreSqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartStore for CartStoreSqlite {
    async fn load(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entity = sqlx::query_as::<_, KeyValueEntity>(
            "SELECT key, value, updated_at FROM kv_store WHERE key = ?1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::Read)?;

        Ok(entity.map(|e| e.value))
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::Write)?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::Remove)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DatabaseConfig, create_sqlite_pool, ensure_schema};
    use business::domain::cart::repository::CART_STORAGE_KEY;

    async fn memory_store() -> CartStoreSqlite {
        let pool = create_sqlite_pool(&DatabaseConfig::new("sqlite::memory:".to_string()))
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();
        CartStoreSqlite::new(pool)
    }

    #[tokio::test]
    async fn should_return_none_when_key_missing() {
        let store = memory_store().await;

        let loaded = store.load(CART_STORAGE_KEY).await.unwrap();

        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn should_save_and_overwrite_record() {
        let store = memory_store().await;

        store.save(CART_STORAGE_KEY, "[]").await.unwrap();
        store
            .save(CART_STORAGE_KEY, r#"[{"id":1,"quantity":2}]"#)
            .await
            .unwrap();

        let loaded = store.load(CART_STORAGE_KEY).await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"[{"id":1,"quantity":2}]"#));
    }

    #[tokio::test]
    async fn should_remove_record() {
        let store = memory_store().await;
        store.save(CART_STORAGE_KEY, "[]").await.unwrap();

        store.remove(CART_STORAGE_KEY).await.unwrap();

        assert!(store.load(CART_STORAGE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_ignore_removal_of_missing_key() {
        let store = memory_store().await;

        assert!(store.remove("missing").await.is_ok());
    }

    struct SilentLogger;

    impl business::domain::logger::Logger for SilentLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    struct DiscardNotifier;

    impl business::domain::cart::notification::NotificationSink for DiscardNotifier {
        fn notify(&self, _notification: business::domain::cart::notification::CartNotification) {}
    }

    #[tokio::test]
    async fn should_restore_cart_manager_state_from_sqlite() {
        use business::application::cart::manager::CartManager;
        use business::domain::cart::model::CartCandidate;
        use business::domain::cart::service::CartService;
        use business::domain::shared::value_objects::ListingId;
        use std::sync::Arc;

        let store: Arc<dyn CartStore> = Arc::new(memory_store().await);
        let cart = CartManager::load(store.clone(), Arc::new(DiscardNotifier), Arc::new(SilentLogger)).await;
        cart.add_item(
            CartCandidate {
                id: ListingId::new(1),
                title: "Nova".to_string(),
                description: None,
                unit_price: "19.99".parse().unwrap(),
                image_url: None,
            },
            Some(3),
        )
        .await;

        let reloaded = CartManager::load(store, Arc::new(DiscardNotifier), Arc::new(SilentLogger)).await;

        assert_eq!(reloaded.items().await, cart.items().await);
        assert_eq!(reloaded.item_count().await, 3);
    }

    #[tokio::test]
    async fn should_keep_keys_independent() {
        let store = memory_store().await;

        store.save(CART_STORAGE_KEY, "cart-value").await.unwrap();
        store.save("other", "other-value").await.unwrap();
        store.remove("other").await.unwrap();

        assert_eq!(
            store.load(CART_STORAGE_KEY).await.unwrap().as_deref(),
            Some("cart-value")
        );
    }
}
