//! Payment handoff orchestration.
//!
//! After an order is placed, the selected gateway may need a client-side
//! continuation: Stripe hands back a PaymentIntent for the gateway SDK to
//! confirm, VNPay hands back a redirect URL. Cash on delivery needs
//! nothing. Settlement itself happens inside the gateway; the client only
//! polls the order's payment status afterwards.

use std::sync::Arc;
use std::time::Duration;

use shopfront_api::{ApiError, PaymentsApi};
use shopfront_core::OrderId;
use shopfront_models::{Order, PaymentStatus, PaymentStatusView, StripePaymentIntent, VnpayPaymentUrl};

/// What the UI must do next to collect payment for an order.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentHandoff {
    /// Nothing to collect now; the order is complete client-side.
    CashOnDelivery,
    /// Confirm this intent with the gateway SDK.
    Stripe(StripePaymentIntent),
    /// Send the user to the gateway's payment pages.
    VnpayRedirect(VnpayPaymentUrl),
}

pub struct PaymentFlow<A: PaymentsApi> {
    api: Arc<A>,
}

impl<A: PaymentsApi> PaymentFlow<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Begin the gateway handoff for a freshly placed order, keyed on the
    /// payment method recorded in the order itself.
    pub async fn start(&self, order: &Order) -> Result<PaymentHandoff, ApiError> {
        match order.payment_method.as_str() {
            "stripe" => {
                let intent = self.api.create_stripe_intent(order.id).await?;
                Ok(PaymentHandoff::Stripe(intent))
            }
            "vnpay" => {
                let url = self.api.create_vnpay_url(order.id).await?;
                Ok(PaymentHandoff::VnpayRedirect(url))
            }
            _ => Ok(PaymentHandoff::CashOnDelivery),
        }
    }

    /// Poll the order's payment status until it leaves `pending` or the
    /// poll budget runs out, returning the last observed view either way.
    ///
    /// Always issues at least one status fetch, even with `max_polls` of
    /// zero; the budget bounds the repeats, not the initial read.
    pub async fn await_settlement(
        &self,
        order_id: OrderId,
        max_polls: u32,
        interval: Duration,
    ) -> Result<PaymentStatusView, ApiError> {
        let mut view = self.api.payment_status(order_id).await?;
        for _ in 1..max_polls {
            if view.payment_status != PaymentStatus::Pending {
                break;
            }
            tokio::time::sleep(interval).await;
            view = self.api.payment_status(order_id).await?;
        }
        Ok(view)
    }
}
