//! Checkout store: a three-step machine over order placement.
//!
//! Steps move shipping -> review -> success. Navigation can go forward to
//! review and back to shipping; the success step is entered only by a
//! successful `submit_order` and never left by navigation. Entering
//! review requires a shipping address.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopfront_api::{ApiError, CartApi, Notifier, OrdersApi};
use shopfront_models::{CreateOrderRequest, Order, PaymentMethod, ShippingAddressInput};
use thiserror::Error;

use crate::cart::CartStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Review,
    Success,
}

impl CheckoutStep {
    /// Whether `next` is reachable from this step at all. Success is in
    /// the table as the target of a submit, not of navigation.
    pub fn allows(self, next: CheckoutStep) -> bool {
        use CheckoutStep::*;
        matches!((self, next), (Shipping, Review) | (Review, Shipping) | (Review, Success))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Review => "review",
            CheckoutStep::Success => "success",
        }
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("a shipping address is required before continuing")]
    MissingAddress,
    #[error("cannot move from the {from} step to the {to} step")]
    IllegalTransition {
        from: CheckoutStep,
        to: CheckoutStep,
    },
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub struct CheckoutStore<A: OrdersApi> {
    api: Arc<A>,
    notifier: Arc<dyn Notifier>,
    step: CheckoutStep,
    shipping_address: Option<ShippingAddressInput>,
    payment_method: PaymentMethod,
    notes: Option<String>,
    order: Option<Order>,
    loading: bool,
    error: Option<String>,
}

impl<A: OrdersApi> CheckoutStore<A> {
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            step: CheckoutStep::default(),
            shipping_address: None,
            payment_method: PaymentMethod::default(),
            notes: None,
            order: None,
            loading: false,
            error: None,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn shipping_address(&self) -> Option<&ShippingAddressInput> {
        self.shipping_address.as_ref()
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_shipping_address(&mut self, address: ShippingAddressInput) {
        self.shipping_address = Some(address);
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }

    /// Navigate between steps. Success is never a navigation target;
    /// entering review requires a shipping address.
    pub fn go_to(&mut self, next: CheckoutStep) -> Result<(), CheckoutError> {
        if next == CheckoutStep::Success || !self.step.allows(next) {
            return Err(CheckoutError::IllegalTransition {
                from: self.step,
                to: next,
            });
        }
        if next == CheckoutStep::Review && self.shipping_address.is_none() {
            self.notifier.error("Please enter a shipping address");
            return Err(CheckoutError::MissingAddress);
        }
        self.step = next;
        self.error = None;
        Ok(())
    }

    /// Return from review to shipping.
    pub fn back(&mut self) -> Result<(), CheckoutError> {
        self.go_to(CheckoutStep::Shipping)
    }

    /// Place the order. Only valid on the review step. On success the
    /// cart is refreshed (the backend consumed it), the order is kept for
    /// the success view, and the step moves to success. On failure the
    /// step stays on review with the failure message retained.
    pub async fn submit_order<C: CartApi>(
        &mut self,
        cart: &mut CartStore<C>,
    ) -> Result<Order, CheckoutError> {
        let Some(shipping_address) = self.shipping_address.clone() else {
            self.notifier.error("Please enter a shipping address");
            return Err(CheckoutError::MissingAddress);
        };
        if self.step != CheckoutStep::Review {
            return Err(CheckoutError::IllegalTransition {
                from: self.step,
                to: CheckoutStep::Success,
            });
        }

        let req = CreateOrderRequest {
            shipping_address,
            payment_method: self.payment_method,
            notes: self.notes.clone(),
        };

        self.loading = true;
        self.error = None;
        let result = self.api.create_order(&req).await;
        self.loading = false;

        match result {
            Ok(order) => {
                cart.fetch_cart().await;
                self.order = Some(order.clone());
                self.step = CheckoutStep::Success;
                self.notifier.success("Order placed successfully!");
                Ok(order)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err.into())
            }
        }
    }

    /// Reset checkout inputs, except when showing a completed order: the
    /// success view survives resets so navigation cannot wipe it.
    pub fn reset(&mut self) {
        if self.step == CheckoutStep::Success {
            return;
        }
        self.reset_after_order();
    }

    /// Unconditional reset, for starting a fresh checkout after an order
    /// has been viewed.
    pub fn reset_after_order(&mut self) {
        self.step = CheckoutStep::default();
        self.shipping_address = None;
        self.payment_method = PaymentMethod::default();
        self.notes = None;
        self.order = None;
        self.loading = false;
        self.error = None;
    }
}
