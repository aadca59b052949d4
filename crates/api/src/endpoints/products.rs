//! Catalog endpoints (read-only from the storefront's perspective).

use async_trait::async_trait;
use reqwest::Method;
use shopfront_core::ProductId;
use shopfront_models::product::{Category, Product, ProductQuery, ProductsResponse};

use crate::client::ApiClient;
use crate::error::ApiError;

#[async_trait]
pub trait ProductsApi: Send + Sync {
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductsResponse, ApiError>;

    async fn get_product(&self, product_id: ProductId) -> Result<Product, ApiError>;

    async fn get_product_by_slug(&self, slug: &str) -> Result<Product, ApiError>;

    async fn featured_products(&self) -> Result<Vec<Product>, ApiError>;

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
}

#[async_trait]
impl ProductsApi for ApiClient {
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductsResponse, ApiError> {
        self.send(self.request(Method::GET, "/products").query(query))
            .await
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Product, ApiError> {
        let path = format!("/products/{product_id}");
        self.send(self.request(Method::GET, &path)).await
    }

    async fn get_product_by_slug(&self, slug: &str) -> Result<Product, ApiError> {
        let path = format!("/products/slug/{slug}");
        self.send(self.request(Method::GET, &path)).await
    }

    async fn featured_products(&self) -> Result<Vec<Product>, ApiError> {
        let query = ProductQuery {
            featured: Some(true),
            limit: Some(8),
            ..ProductQuery::default()
        };
        let page: ProductsResponse = self
            .send(self.request(Method::GET, "/products").query(&query))
            .await?;
        Ok(page.data)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.send(self.request(Method::GET, "/categories")).await
    }
}
