use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::service::CartService;
use business::domain::cart::use_cases::add_listing::{
    AddListingToCartParams, AddListingToCartUseCase,
};
use business::domain::shared::value_objects::ListingId;
use notifier::inbox::InboxNotifier;

use crate::api::cart::dto::{
    AddCartItemRequest, CartResponse, NotificationResponse, UpdateQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    cart: Arc<dyn CartService>,
    add_listing_use_case: Arc<dyn AddListingToCartUseCase>,
    inbox: Arc<InboxNotifier>,
}

impl CartApi {
    pub fn new(
        cart: Arc<dyn CartService>,
        add_listing_use_case: Arc<dyn AddListingToCartUseCase>,
        inbox: Arc<InboxNotifier>,
    ) -> Self {
        Self {
            cart,
            add_listing_use_case,
            inbox,
        }
    }
}

/// Shopping cart API
///
/// One cart per service instance, persisted across restarts.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the lines in insertion order with the item count and total.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> Json<CartResponse> {
        Json(self.cart.snapshot().await.into())
    }

    /// Add a game to the cart
    ///
    /// Looks the game up in the catalog. Adding a game that is already in
    /// the cart increases its quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddCartItemRequest>) -> AddCartItemResponse {
        let params = AddListingToCartParams {
            listing_id: ListingId::new(body.0.game_id),
            quantity: body.0.quantity,
        };

        match self.add_listing_use_case.execute(params).await {
            Ok(snapshot) => AddCartItemResponse::Created(Json(snapshot.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddCartItemResponse::NotFound(json),
                    409 => AddCartItemResponse::Conflict(json),
                    _ => AddCartItemResponse::BadGateway(json),
                }
            }
        }
    }

    /// Set the quantity of a line
    ///
    /// 0 or less removes the line. Unknown ids leave the cart untouched.
    #[oai(path = "/cart/items/:id", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        id: Path<i64>,
        body: Json<UpdateQuantityRequest>,
    ) -> Json<CartResponse> {
        let snapshot = self
            .cart
            .update_quantity(ListingId::new(id.0), body.0.quantity)
            .await;
        Json(snapshot.into())
    }

    /// Remove a line
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, id: Path<i64>) -> Json<CartResponse> {
        Json(self.cart.remove_item(ListingId::new(id.0)).await.into())
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> Json<CartResponse> {
        Json(self.cart.clear().await.into())
    }

    /// Take pending notifications
    ///
    /// Returns the notifications raised since the last call, oldest first,
    /// and empties the inbox.
    #[oai(path = "/cart/notifications", method = "get", tag = "ApiTags::Cart")]
    async fn notifications(&self) -> Json<Vec<NotificationResponse>> {
        Json(self.inbox.drain().into_iter().map(Into::into).collect())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
