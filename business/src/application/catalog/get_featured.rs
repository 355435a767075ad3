use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::FeaturedListings;
use crate::domain::catalog::services::CatalogService;
use crate::domain::catalog::use_cases::get_featured::GetFeaturedListingsUseCase;
use crate::domain::logger::Logger;

pub struct GetFeaturedListingsUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFeaturedListingsUseCase for GetFeaturedListingsUseCaseImpl {
    async fn execute(&self) -> Result<FeaturedListings, CatalogError> {
        self.logger.info("Getting featured listings");
        let listings = self.catalog.get_all().await?;
        let featured = FeaturedListings::from_listings(listings);
        self.logger.info(&format!(
            "Retrieved {} available and {} upcoming listings",
            featured.available.len(),
            featured.upcoming.len()
        ));
        Ok(featured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::Listing;
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

    fn listing(id: i64, available: bool) -> Listing {
        Listing {
            id: ListingId::new(id),
            title: format!("Game {}", id),
            description: None,
            price: BigDecimal::from(10),
            image_url: None,
            available,
        }
    }

    #[tokio::test]
    async fn should_split_catalog_into_available_and_upcoming() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_all()
            .returning(|| Ok(vec![listing(1, true), listing(2, false), listing(3, true)]));

        let use_case = GetFeaturedListingsUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let featured = use_case.execute().await.unwrap();

        assert_eq!(featured.available.len(), 2);
        assert_eq!(featured.upcoming.len(), 1);
        assert_eq!(featured.upcoming[0].id, ListingId::new(2));
    }

    #[tokio::test]
    async fn should_propagate_catalog_failure() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_all()
            .returning(|| Err(CatalogError::ServiceUnavailable));

        let use_case = GetFeaturedListingsUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            CatalogError::ServiceUnavailable
        ));
    }
}
