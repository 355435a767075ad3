use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Listing;
use crate::domain::catalog::services::CatalogService;
use crate::domain::catalog::use_cases::get_by_id::{GetListingByIdParams, GetListingByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetListingByIdUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetListingByIdUseCase for GetListingByIdUseCaseImpl {
    async fn execute(&self, params: GetListingByIdParams) -> Result<Listing, CatalogError> {
        self.logger.info(&format!("Getting listing: {}", params.id));
        self.catalog.get_by_id(params.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ListingId;
    use bigdecimal::BigDecimal;
    use mockall::mock;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl CatalogService for Catalog {
            async fn get_all(&self) -> Result<Vec<Listing>, CatalogError>;
            async fn get_by_id(&self, id: ListingId) -> Result<Listing, CatalogError>;
            async fn search(&self, query: &str, limit: usize) -> Result<Vec<Listing>, CatalogError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_listing_when_found() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_by_id().returning(|id| {
            Ok(Listing {
                id,
                title: "Nova".to_string(),
                description: None,
                price: BigDecimal::from(20),
                image_url: None,
                available: true,
            })
        });

        let use_case = GetListingByIdUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetListingByIdParams {
                id: ListingId::new(3),
            })
            .await;

        assert_eq!(result.unwrap().id, ListingId::new(3));
    }

    #[tokio::test]
    async fn should_return_not_found_when_listing_does_not_exist() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_by_id()
            .returning(|_| Err(CatalogError::NotFound));

        let use_case = GetListingByIdUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetListingByIdParams {
                id: ListingId::new(3),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CatalogError::NotFound));
    }
}
