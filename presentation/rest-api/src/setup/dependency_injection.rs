use std::sync::Arc;

use logger::TracingLogger;
use notifier::inbox::InboxNotifier;

use catalog::client::CatalogClient;
use catalog::listing_provider::CatalogServicePostgrest;

use business::application::cart::add_listing::AddListingToCartUseCaseImpl;
use business::application::cart::manager::CartManager;
use business::application::catalog::get_by_id::GetListingByIdUseCaseImpl;
use business::application::catalog::get_featured::GetFeaturedListingsUseCaseImpl;
use business::application::catalog::search::SearchListingsUseCaseImpl;
use business::domain::cart::service::CartService;
use business::domain::catalog::services::CatalogService;
use business::domain::logger::Logger;

use crate::config::app_config::AppConfig;
use crate::config::storage_config::{StorageBackend, init_cart_store};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::HealthApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let storage_name = match config.storage.backend {
            StorageBackend::Sqlite { .. } => "sqlite",
            StorageBackend::Memory => "memory",
        };
        let health_api = crate::api::health::routes::HealthApi::new(storage_name);

        // Infrastructure adapters
        let store = init_cart_store(&config.storage).await?;
        let inbox = Arc::new(InboxNotifier::new(config.notifications.inbox_capacity));
        let catalog_service: Arc<dyn CatalogService> = Arc::new(CatalogServicePostgrest::new(
            CatalogClient::new(config.catalog.url.clone(), config.catalog.api_key.clone()),
        ));

        let cart: Arc<dyn CartService> =
            Arc::new(CartManager::load(store, inbox.clone(), logger.clone()).await);
        spawn_snapshot_logger(cart.as_ref());

        // Cart use cases
        let add_listing_use_case = Arc::new(AddListingToCartUseCaseImpl {
            catalog: catalog_service.clone(),
            cart: cart.clone(),
            logger: logger.clone(),
        });

        // Catalog use cases
        let get_featured_use_case = Arc::new(GetFeaturedListingsUseCaseImpl {
            catalog: catalog_service.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetListingByIdUseCaseImpl {
            catalog: catalog_service.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchListingsUseCaseImpl {
            catalog: catalog_service,
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(cart, add_listing_use_case, inbox);
        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            get_featured_use_case,
            get_by_id_use_case,
            search_use_case,
        );

        Ok(Self {
            health_api,
            cart_api,
            catalog_api,
        })
    }
}

/// Traces every published cart snapshot until the cart is dropped.
fn spawn_snapshot_logger(cart: &dyn CartService) {
    let mut snapshots = cart.subscribe();
    tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let snapshot = snapshots.borrow_and_update().clone();
            tracing::debug!(
                items = snapshot.items.len(),
                item_count = snapshot.item_count,
                total = %snapshot.total_price,
                "cart changed"
            );
        }
    });
}
