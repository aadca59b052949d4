//! Back-office endpoints. All of these require an admin bearer credential;
//! a customer token gets a 403 from the classifier like any other call.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::multipart;
use shopfront_core::{CategoryId, OrderId, ProductId, UserId};
use shopfront_models::admin::{
    AdminUsersResponse, CreateCategoryRequest, CreateProductRequest, DashboardStats,
    RevenueDataPoint, TopProduct, UpdateCategoryRequest, UpdateOrderStatusRequest,
    UpdateProductRequest, UpdateUserRoleRequest, UpdateUserStatusRequest, UserQuery,
};
use shopfront_models::order::{Order, OrderQuery, OrdersResponse};
use shopfront_models::product::{Category, Product, ProductImage};
use shopfront_models::user::{Role, User};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, serde::Serialize)]
struct LimitQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

/// Multipart payload for a product image upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub alt_text: Option<String>,
    pub is_primary: Option<bool>,
}

#[async_trait]
pub trait AdminApi: Send + Sync {
    // Dashboard
    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError>;
    async fn revenue_chart(&self, days: Option<u32>) -> Result<Vec<RevenueDataPoint>, ApiError>;
    async fn recent_orders(&self, limit: Option<u32>) -> Result<Vec<Order>, ApiError>;
    async fn low_stock_products(&self, threshold: Option<u32>) -> Result<Vec<Product>, ApiError>;
    async fn top_products(&self, limit: Option<u32>) -> Result<Vec<TopProduct>, ApiError>;

    // Users
    async fn list_users(&self, query: &UserQuery) -> Result<AdminUsersResponse, ApiError>;
    async fn get_user(&self, user_id: UserId) -> Result<User, ApiError>;
    async fn update_user_role(&self, user_id: UserId, role: Role) -> Result<User, ApiError>;
    async fn update_user_status(&self, user_id: UserId, is_active: bool)
    -> Result<User, ApiError>;

    // Orders
    async fn admin_orders(&self, query: &OrderQuery) -> Result<OrdersResponse, ApiError>;
    async fn admin_order(&self, order_id: OrderId) -> Result<Order, ApiError>;
    /// Update the order's lifecycle status, optionally settling the
    /// payment status in the same call.
    async fn update_order_status(
        &self,
        order_id: OrderId,
        req: &UpdateOrderStatusRequest,
    ) -> Result<Order, ApiError>;

    // Products
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, ApiError>;
    async fn update_product(
        &self,
        product_id: ProductId,
        req: &UpdateProductRequest,
    ) -> Result<Product, ApiError>;
    async fn delete_product(&self, product_id: ProductId) -> Result<(), ApiError>;
    async fn upload_product_image(
        &self,
        product_id: ProductId,
        upload: ImageUpload,
    ) -> Result<ProductImage, ApiError>;
    async fn delete_product_image(
        &self,
        product_id: ProductId,
        image_id: Uuid,
    ) -> Result<(), ApiError>;

    // Categories
    async fn create_category(&self, req: &CreateCategoryRequest) -> Result<Category, ApiError>;
    async fn update_category(
        &self,
        category_id: CategoryId,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, ApiError>;
    async fn delete_category(&self, category_id: CategoryId) -> Result<(), ApiError>;
}

#[async_trait]
impl AdminApi for ApiClient {
    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.send(self.request(Method::GET, "/admin/dashboard/stats"))
            .await
    }

    async fn revenue_chart(&self, days: Option<u32>) -> Result<Vec<RevenueDataPoint>, ApiError> {
        #[derive(serde::Serialize)]
        struct DaysQuery {
            #[serde(skip_serializing_if = "Option::is_none")]
            days: Option<u32>,
        }
        self.send(
            self.request(Method::GET, "/admin/dashboard/revenue")
                .query(&DaysQuery { days }),
        )
        .await
    }

    async fn recent_orders(&self, limit: Option<u32>) -> Result<Vec<Order>, ApiError> {
        self.send(
            self.request(Method::GET, "/admin/dashboard/recent-orders")
                .query(&LimitQuery { limit }),
        )
        .await
    }

    async fn low_stock_products(&self, threshold: Option<u32>) -> Result<Vec<Product>, ApiError> {
        #[derive(serde::Serialize)]
        struct ThresholdQuery {
            #[serde(skip_serializing_if = "Option::is_none")]
            threshold: Option<u32>,
        }
        self.send(
            self.request(Method::GET, "/admin/dashboard/low-stock")
                .query(&ThresholdQuery { threshold }),
        )
        .await
    }

    async fn top_products(&self, limit: Option<u32>) -> Result<Vec<TopProduct>, ApiError> {
        self.send(
            self.request(Method::GET, "/admin/dashboard/top-products")
                .query(&LimitQuery { limit }),
        )
        .await
    }

    async fn list_users(&self, query: &UserQuery) -> Result<AdminUsersResponse, ApiError> {
        self.send(self.request(Method::GET, "/admin/users").query(query))
            .await
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, ApiError> {
        let path = format!("/admin/users/{user_id}");
        self.send(self.request(Method::GET, &path)).await
    }

    async fn update_user_role(&self, user_id: UserId, role: Role) -> Result<User, ApiError> {
        let path = format!("/admin/users/{user_id}/role");
        self.send(
            self.request(Method::PUT, &path)
                .json(&UpdateUserRoleRequest { role }),
        )
        .await
    }

    async fn update_user_status(
        &self,
        user_id: UserId,
        is_active: bool,
    ) -> Result<User, ApiError> {
        let path = format!("/admin/users/{user_id}/status");
        self.send(
            self.request(Method::PUT, &path)
                .json(&UpdateUserStatusRequest { is_active }),
        )
        .await
    }

    async fn admin_orders(&self, query: &OrderQuery) -> Result<OrdersResponse, ApiError> {
        self.send(self.request(Method::GET, "/admin/orders").query(query))
            .await
    }

    async fn admin_order(&self, order_id: OrderId) -> Result<Order, ApiError> {
        let path = format!("/admin/orders/{order_id}");
        self.send(self.request(Method::GET, &path)).await
    }

    async fn update_order_status(
        &self,
        order_id: OrderId,
        req: &UpdateOrderStatusRequest,
    ) -> Result<Order, ApiError> {
        let path = format!("/admin/orders/{order_id}/status");
        self.send(self.request(Method::PUT, &path).json(req)).await
    }

    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, ApiError> {
        self.send(self.request(Method::POST, "/products").json(req))
            .await
    }

    async fn update_product(
        &self,
        product_id: ProductId,
        req: &UpdateProductRequest,
    ) -> Result<Product, ApiError> {
        let path = format!("/products/{product_id}");
        self.send(self.request(Method::PATCH, &path).json(req))
            .await
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<(), ApiError> {
        let path = format!("/products/{product_id}");
        self.send_unit(self.request(Method::DELETE, &path)).await
    }

    async fn upload_product_image(
        &self,
        product_id: ProductId,
        upload: ImageUpload,
    ) -> Result<ProductImage, ApiError> {
        let path = format!("/products/{product_id}/images");
        let mut form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(upload.bytes).file_name(upload.file_name),
        );
        if let Some(alt_text) = upload.alt_text {
            form = form.text("alt_text", alt_text);
        }
        if let Some(is_primary) = upload.is_primary {
            form = form.text("is_primary", is_primary.to_string());
        }
        self.send(self.request(Method::POST, &path).multipart(form))
            .await
    }

    async fn delete_product_image(
        &self,
        product_id: ProductId,
        image_id: Uuid,
    ) -> Result<(), ApiError> {
        let path = format!("/products/{product_id}/images/{image_id}");
        self.send_unit(self.request(Method::DELETE, &path)).await
    }

    async fn create_category(&self, req: &CreateCategoryRequest) -> Result<Category, ApiError> {
        self.send(self.request(Method::POST, "/categories").json(req))
            .await
    }

    async fn update_category(
        &self,
        category_id: CategoryId,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, ApiError> {
        let path = format!("/categories/{category_id}");
        self.send(self.request(Method::PATCH, &path).json(req))
            .await
    }

    async fn delete_category(&self, category_id: CategoryId) -> Result<(), ApiError> {
        let path = format!("/categories/{category_id}");
        self.send_unit(self.request(Method::DELETE, &path)).await
    }
}
