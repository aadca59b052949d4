//! Order endpoints. The client only creates orders and requests state
//! transitions; the backend owns the lifecycle.

use async_trait::async_trait;
use reqwest::Method;
use shopfront_core::OrderId;
use shopfront_models::{CreateOrderRequest, Order, OrderQuery, OrdersResponse};

use crate::client::ApiClient;
use crate::error::ApiError;

#[async_trait]
pub trait OrdersApi: Send + Sync {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order, ApiError>;

    async fn list_orders(&self, query: &OrderQuery) -> Result<OrdersResponse, ApiError>;

    async fn get_order(&self, order_id: OrderId) -> Result<Order, ApiError>;

    async fn cancel_order(&self, order_id: OrderId) -> Result<Order, ApiError>;
}

#[async_trait]
impl OrdersApi for ApiClient {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order, ApiError> {
        self.send(self.request(Method::POST, "/orders").json(req))
            .await
    }

    async fn list_orders(&self, query: &OrderQuery) -> Result<OrdersResponse, ApiError> {
        self.send(self.request(Method::GET, "/orders").query(query))
            .await
    }

    async fn get_order(&self, order_id: OrderId) -> Result<Order, ApiError> {
        let path = format!("/orders/{order_id}");
        self.send(self.request(Method::GET, &path)).await
    }

    async fn cancel_order(&self, order_id: OrderId) -> Result<Order, ApiError> {
        let path = format!("/orders/{order_id}/cancel");
        self.send(self.request(Method::PUT, &path)).await
    }
}
