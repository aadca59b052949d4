//! Payment gateway endpoints. The application only orchestrates intent
//! creation and status polling; capture happens inside the gateway.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use shopfront_core::OrderId;
use shopfront_models::{PaymentStatusView, StripeConfig, StripePaymentIntent, VnpayPaymentUrl};

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
struct PaymentOrderRef {
    order_id: OrderId,
}

#[async_trait]
pub trait PaymentsApi: Send + Sync {
    async fn stripe_config(&self) -> Result<StripeConfig, ApiError>;

    async fn create_stripe_intent(&self, order_id: OrderId)
    -> Result<StripePaymentIntent, ApiError>;

    async fn create_vnpay_url(&self, order_id: OrderId) -> Result<VnpayPaymentUrl, ApiError>;

    async fn payment_status(&self, order_id: OrderId) -> Result<PaymentStatusView, ApiError>;
}

#[async_trait]
impl PaymentsApi for ApiClient {
    async fn stripe_config(&self) -> Result<StripeConfig, ApiError> {
        self.send(self.request(Method::GET, "/payments/stripe/config"))
            .await
    }

    async fn create_stripe_intent(
        &self,
        order_id: OrderId,
    ) -> Result<StripePaymentIntent, ApiError> {
        self.send(
            self.request(Method::POST, "/payments/stripe/create-intent")
                .json(&PaymentOrderRef { order_id }),
        )
        .await
    }

    async fn create_vnpay_url(&self, order_id: OrderId) -> Result<VnpayPaymentUrl, ApiError> {
        self.send(
            self.request(Method::POST, "/payments/vnpay/create")
                .json(&PaymentOrderRef { order_id }),
        )
        .await
    }

    async fn payment_status(&self, order_id: OrderId) -> Result<PaymentStatusView, ApiError> {
        let path = format!("/payments/{order_id}/status");
        self.send(self.request(Method::GET, &path)).await
    }
}
