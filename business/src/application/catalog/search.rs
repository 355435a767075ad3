use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Listing;
use crate::domain::catalog::services::{
    CatalogService, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, MIN_SEARCH_QUERY_LEN,
};
use crate::domain::catalog::use_cases::search::{SearchListingsParams, SearchListingsUseCase};
use crate::domain::logger::Logger;

pub struct SearchListingsUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchListingsUseCase for SearchListingsUseCaseImpl {
    async fn execute(&self, params: SearchListingsParams) -> Result<Vec<Listing>, CatalogError> {
        let query = params.query.trim();

        // Too short to be meaningful: answer locally without hitting the catalog
        if query.chars().count() < MIN_SEARCH_QUERY_LEN {
            self.logger
                .debug(&format!("Search query too short: {:?}", query));
            return Ok(Vec::new());
        }

        let limit = params
            .limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT);

        self.logger
            .info(&format!("Searching listings: {:?} (limit {})", query, limit));
        let results = self.catalog.search(query, limit).await?;
        self.logger
            .info(&format!("Search returned {} listings", results.len()));
        Ok(results)
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

    fn listing(id: i64) -> Listing {
        Listing {
            id: ListingId::new(id),
            title: "Nova".to_string(),
            description: None,
            price: BigDecimal::from(10),
            image_url: None,
            available: true,
        }
    }

    #[tokio::test]
    async fn should_skip_catalog_when_query_too_short() {
        let mut catalog = MockCatalog::new();
        catalog.expect_search().never();

        let use_case = SearchListingsUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchListingsParams {
                query: "  n ".to_string(),
                limit: None,
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_search_trimmed_query_with_default_limit() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search()
            .withf(|query, limit| query == "nova" && *limit == DEFAULT_SEARCH_LIMIT)
            .times(1)
            .returning(|_, _| Ok(vec![listing(1)]));

        let use_case = SearchListingsUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchListingsParams {
                query: "  nova ".to_string(),
                limit: None,
            })
            .await;

        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_cap_requested_limit() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search()
            .withf(|_, limit| *limit == MAX_SEARCH_LIMIT)
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let use_case = SearchListingsUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchListingsParams {
                query: "space".to_string(),
                limit: Some(500),
            })
            .await;

        assert!(result.is_ok());
    }
}
