//! Wishlist endpoints.

use async_trait::async_trait;
use reqwest::Method;
use shopfront_core::ProductId;
use shopfront_models::WishlistResponse;

use crate::client::ApiClient;
use crate::error::ApiError;

#[async_trait]
pub trait WishlistApi: Send + Sync {
    async fn fetch_wishlist(&self) -> Result<WishlistResponse, ApiError>;

    async fn add_to_wishlist(&self, product_id: ProductId) -> Result<WishlistResponse, ApiError>;

    async fn remove_from_wishlist(&self, product_id: ProductId) -> Result<(), ApiError>;

    /// Remove the product from the wishlist and add it to the cart in one
    /// backend call.
    async fn move_to_cart(&self, product_id: ProductId) -> Result<(), ApiError>;

    async fn clear_wishlist(&self) -> Result<(), ApiError>;
}

#[async_trait]
impl WishlistApi for ApiClient {
    async fn fetch_wishlist(&self) -> Result<WishlistResponse, ApiError> {
        self.send(self.request(Method::GET, "/wishlist")).await
    }

    async fn add_to_wishlist(&self, product_id: ProductId) -> Result<WishlistResponse, ApiError> {
        let path = format!("/wishlist/{product_id}");
        self.send(self.request(Method::POST, &path)).await
    }

    async fn remove_from_wishlist(&self, product_id: ProductId) -> Result<(), ApiError> {
        let path = format!("/wishlist/{product_id}");
        self.send_unit(self.request(Method::DELETE, &path)).await
    }

    async fn move_to_cart(&self, product_id: ProductId) -> Result<(), ApiError> {
        let path = format!("/wishlist/{product_id}/move-to-cart");
        self.send_unit(self.guest_request(Method::POST, &path)).await
    }

    async fn clear_wishlist(&self) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::DELETE, "/wishlist"))
            .await
    }
}
