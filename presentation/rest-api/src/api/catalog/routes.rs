use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::use_cases::get_by_id::{
    GetListingByIdParams, GetListingByIdUseCase,
};
use business::domain::catalog::use_cases::get_featured::GetFeaturedListingsUseCase;
use business::domain::catalog::use_cases::search::{SearchListingsParams, SearchListingsUseCase};
use business::domain::shared::value_objects::ListingId;

use crate::api::catalog::dto::{FeaturedListingsResponse, ListingResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_featured_use_case: Arc<dyn GetFeaturedListingsUseCase>,
    get_by_id_use_case: Arc<dyn GetListingByIdUseCase>,
    search_use_case: Arc<dyn SearchListingsUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_featured_use_case: Arc<dyn GetFeaturedListingsUseCase>,
        get_by_id_use_case: Arc<dyn GetListingByIdUseCase>,
        search_use_case: Arc<dyn SearchListingsUseCase>,
    ) -> Self {
        Self {
            get_featured_use_case,
            get_by_id_use_case,
            search_use_case,
        }
    }
}

/// Game catalog API
#[OpenApi]
impl CatalogApi {
    /// List games
    ///
    /// Returns the catalog split into games that can be bought now and
    /// upcoming ones.
    #[oai(path = "/games", method = "get", tag = "ApiTags::Catalog")]
    async fn get_featured(&self) -> GetFeaturedResponse {
        match self.get_featured_use_case.execute().await {
            Ok(featured) => GetFeaturedResponse::Ok(Json(featured.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetFeaturedResponse::BadGateway(json)
            }
        }
    }

    /// Search games
    ///
    /// Case-insensitive match on title or description. Queries shorter
    /// than 2 characters return nothing. `limit` defaults to 5, at most 20.
    #[oai(path = "/games/search", method = "get", tag = "ApiTags::Catalog")]
    async fn search(&self, q: Query<Option<String>>, limit: Query<Option<u32>>) -> SearchResponse {
        let params = SearchListingsParams {
            query: q.0.unwrap_or_default(),
            limit: limit.0.map(|l| l as usize),
        };

        match self.search_use_case.execute(params).await {
            Ok(listings) => {
                SearchResponse::Ok(Json(listings.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SearchResponse::BadGateway(json)
            }
        }
    }

    /// Get a game by id
    #[oai(path = "/games/:id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_by_id(&self, id: Path<i64>) -> GetListingByIdResponse {
        let params = GetListingByIdParams {
            id: ListingId::new(id.0),
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(listing) => GetListingByIdResponse::Ok(Json(listing.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetListingByIdResponse::NotFound(json),
                    _ => GetListingByIdResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFeaturedResponse {
    #[oai(status = 200)]
    Ok(Json<FeaturedListingsResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ListingResponse>>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetListingByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ListingResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
