//! Cart endpoints.
//!
//! Every cart call carries the guest-session header; the backend resolves
//! the cart from the bearer credential when present, the session token
//! otherwise.

use async_trait::async_trait;
use reqwest::Method;
use shopfront_core::CartItemId;
use shopfront_models::{AddToCartRequest, Cart, UpdateCartItemRequest};

use crate::client::ApiClient;
use crate::error::ApiError;

#[async_trait]
pub trait CartApi: Send + Sync {
    /// Fetch the authoritative cart snapshot.
    async fn fetch_cart(&self) -> Result<Cart, ApiError>;

    /// Add a product; the backend validates stock.
    async fn add_to_cart(&self, req: &AddToCartRequest) -> Result<Cart, ApiError>;

    /// Change a line's quantity.
    async fn update_cart_item(
        &self,
        item_id: CartItemId,
        req: &UpdateCartItemRequest,
    ) -> Result<Cart, ApiError>;

    /// Remove a line.
    async fn remove_cart_item(&self, item_id: CartItemId) -> Result<Cart, ApiError>;

    /// Empty the cart.
    async fn clear_cart(&self) -> Result<Cart, ApiError>;

    /// Fold the guest cart into the user's cart after login. Safe to call
    /// when no guest cart exists.
    async fn merge_cart(&self) -> Result<Cart, ApiError>;
}

#[async_trait]
impl CartApi for ApiClient {
    async fn fetch_cart(&self) -> Result<Cart, ApiError> {
        self.send(self.guest_request(Method::GET, "/cart")).await
    }

    async fn add_to_cart(&self, req: &AddToCartRequest) -> Result<Cart, ApiError> {
        self.send(self.guest_request(Method::POST, "/cart/items").json(req))
            .await
    }

    async fn update_cart_item(
        &self,
        item_id: CartItemId,
        req: &UpdateCartItemRequest,
    ) -> Result<Cart, ApiError> {
        let path = format!("/cart/items/{item_id}");
        self.send(self.guest_request(Method::PUT, &path).json(req))
            .await
    }

    async fn remove_cart_item(&self, item_id: CartItemId) -> Result<Cart, ApiError> {
        let path = format!("/cart/items/{item_id}");
        self.send(self.guest_request(Method::DELETE, &path)).await
    }

    async fn clear_cart(&self) -> Result<Cart, ApiError> {
        self.send(self.guest_request(Method::DELETE, "/cart")).await
    }

    async fn merge_cart(&self) -> Result<Cart, ApiError> {
        self.send(self.guest_request(Method::POST, "/cart/merge"))
            .await
    }
}
