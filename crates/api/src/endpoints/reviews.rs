//! Review endpoints.

use async_trait::async_trait;
use reqwest::Method;
use shopfront_core::{ProductId, ReviewId};
use shopfront_models::review::{
    CreateReviewRequest, Review, ReviewQuery, ReviewStats, ReviewsResponse,
};

use crate::client::ApiClient;
use crate::error::ApiError;

#[async_trait]
pub trait ReviewsApi: Send + Sync {
    async fn product_reviews(
        &self,
        product_id: ProductId,
        query: &ReviewQuery,
    ) -> Result<ReviewsResponse, ApiError>;

    async fn review_stats(&self, product_id: ProductId) -> Result<ReviewStats, ApiError>;

    /// The signed-in user's review of this product, if any.
    async fn my_review(&self, product_id: ProductId) -> Result<Option<Review>, ApiError>;

    async fn create_review(
        &self,
        product_id: ProductId,
        req: &CreateReviewRequest,
    ) -> Result<Review, ApiError>;

    async fn delete_review(&self, review_id: ReviewId) -> Result<(), ApiError>;

    async fn my_reviews(&self) -> Result<Vec<Review>, ApiError>;
}

#[async_trait]
impl ReviewsApi for ApiClient {
    async fn product_reviews(
        &self,
        product_id: ProductId,
        query: &ReviewQuery,
    ) -> Result<ReviewsResponse, ApiError> {
        let path = format!("/products/{product_id}/reviews");
        self.send(self.request(Method::GET, &path).query(query))
            .await
    }

    async fn review_stats(&self, product_id: ProductId) -> Result<ReviewStats, ApiError> {
        let path = format!("/products/{product_id}/reviews/stats");
        self.send(self.request(Method::GET, &path)).await
    }

    async fn my_review(&self, product_id: ProductId) -> Result<Option<Review>, ApiError> {
        let path = format!("/products/{product_id}/reviews/my-review");
        self.send_optional(self.request(Method::GET, &path)).await
    }

    async fn create_review(
        &self,
        product_id: ProductId,
        req: &CreateReviewRequest,
    ) -> Result<Review, ApiError> {
        let path = format!("/products/{product_id}/reviews");
        self.send(self.request(Method::POST, &path).json(req)).await
    }

    async fn delete_review(&self, review_id: ReviewId) -> Result<(), ApiError> {
        let path = format!("/reviews/{review_id}");
        self.send_unit(self.request(Method::DELETE, &path)).await
    }

    async fn my_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.send(self.request(Method::GET, "/reviews/my-reviews"))
            .await
    }
}
