//! Payment gateway handoff payloads. These endpoints return camelCase.

use serde::{Deserialize, Serialize};
use shopfront_core::{Money, OrderId};

use crate::order::PaymentStatus;

/// Stripe publishable-key configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripeConfig {
    #[serde(rename = "publishableKey")]
    pub publishable_key: String,
}

/// A created Stripe PaymentIntent, confirmed client-side by the gateway SDK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripePaymentIntent {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
    #[serde(rename = "paymentIntentId")]
    pub payment_intent_id: String,
    pub amount: Money,
    pub currency: String,
}

/// A VNPay redirect URL; the gateway captures payment on its own pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VnpayPaymentUrl {
    #[serde(rename = "paymentUrl")]
    pub payment_url: String,
    #[serde(rename = "orderNumber")]
    pub order_number: String,
}

/// Settlement status of an order's payment, polled after a handoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStatusView {
    #[serde(rename = "orderId")]
    pub order_id: OrderId,
    #[serde(rename = "orderNumber")]
    pub order_number: String,
    #[serde(rename = "paymentStatus")]
    pub payment_status: PaymentStatus,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
    pub total: Money,
}
