//! Cart store.
//!
//! Holds the cart snapshot, mutates it through [`CartApi`], and persists
//! the whole state slice after every transition. `add_item` waits for the
//! backend (stock is validated server-side); quantity changes, removals
//! and clears are optimistic with exact rollback.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopfront_api::{ApiError, CartApi, Notifier, session};
use shopfront_core::{CartId, CartItemId, Money, ProductId, line_total};
use shopfront_models::{AddToCartRequest, Cart, CartItem, UpdateCartItemRequest};
use shopfront_storage::{ClientStorage, slice};

use crate::optimistic::optimistic;

const SLICE_KEY: &str = "cart-storage";
const SCHEMA_VERSION: u32 = 1;

/// The persisted, rollback-protected part of the cart store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub cart_id: Option<CartId>,
    pub items: Vec<CartItem>,
    pub subtotal: Money,
    pub item_count: u32,
}

impl CartState {
    /// Adopt an authoritative snapshot from the backend.
    pub fn adopt(&mut self, cart: Cart) {
        self.cart_id = Some(cart.id);
        self.items = cart.items;
        self.subtotal = cart.subtotal;
        self.item_count = cart.item_count;
    }

    /// Recompute totals from the local lines. Only valid inside an
    /// optimistic frame; adopted snapshots carry server-computed totals.
    pub fn recompute_totals(&mut self) {
        self.subtotal = self.items.iter().map(|item| item.line_total).sum();
        self.item_count = self.items.iter().map(|item| item.quantity).sum();
    }
}

pub struct CartStore<A: CartApi> {
    api: Arc<A>,
    storage: Arc<dyn ClientStorage>,
    notifier: Arc<dyn Notifier>,
    state: CartState,
    loading: bool,
    drawer_open: bool,
}

impl<A: CartApi> CartStore<A> {
    /// Build the store, rehydrating the last persisted snapshot if one is
    /// present at the current schema version.
    pub fn new(api: Arc<A>, storage: Arc<dyn ClientStorage>, notifier: Arc<dyn Notifier>) -> Self {
        let state = slice::load_slice(storage.as_ref(), SLICE_KEY, SCHEMA_VERSION)
            .unwrap_or_default();
        Self {
            api,
            storage,
            notifier,
            state,
            loading: false,
            drawer_open: false,
        }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn items(&self) -> &[CartItem] {
        &self.state.items
    }

    pub fn subtotal(&self) -> Money {
        self.state.subtotal
    }

    pub fn item_count(&self) -> u32 {
        self.state.item_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    fn persist(&self) {
        if let Err(err) =
            slice::save_slice(self.storage.as_ref(), SLICE_KEY, SCHEMA_VERSION, &self.state)
        {
            tracing::warn!(%err, "failed to persist cart state");
        }
    }

    /// Refresh the snapshot from the backend. Failures are logged, not
    /// surfaced; the last known state stays in place.
    pub async fn fetch_cart(&mut self) {
        self.loading = true;
        match self.api.fetch_cart().await {
            Ok(cart) => {
                self.state.adopt(cart);
                self.persist();
            }
            Err(err) => {
                tracing::warn!(%err, "cart refresh failed");
            }
        }
        self.loading = false;
    }

    /// Add a product to the cart. Not optimistic: the backend validates
    /// stock, so the local state only changes once it has answered. On
    /// success the cart drawer opens.
    pub async fn add_item(&mut self, product_id: ProductId, quantity: u32) -> Result<(), ApiError> {
        let req = AddToCartRequest {
            product_id,
            quantity,
        };
        self.loading = true;
        let result = self.api.add_to_cart(&req).await;
        self.loading = false;
        match result {
            Ok(cart) => {
                self.state.adopt(cart);
                self.persist();
                self.drawer_open = true;
                self.notifier.success("Added to cart");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Change a line's quantity, optimistically. A quantity of zero
    /// removes the line.
    pub async fn update_quantity(
        &mut self,
        item_id: CartItemId,
        quantity: u32,
    ) -> Result<(), ApiError> {
        if quantity == 0 {
            return self.remove_item(item_id).await;
        }

        let api = Arc::clone(&self.api);
        let req = UpdateCartItemRequest { quantity };
        let call = async move { api.update_cart_item(item_id, &req).await };

        self.loading = true;
        let result = optimistic(
            &mut self.state,
            |state| {
                if let Some(item) = state.items.iter_mut().find(|item| item.id == item_id) {
                    item.quantity = quantity;
                    item.line_total = line_total(item.price, quantity);
                }
                state.recompute_totals();
            },
            call,
        )
        .await;
        self.loading = false;

        self.reconcile(result)
    }

    /// Remove a line, optimistically.
    pub async fn remove_item(&mut self, item_id: CartItemId) -> Result<(), ApiError> {
        let api = Arc::clone(&self.api);
        let call = async move { api.remove_cart_item(item_id).await };

        self.loading = true;
        let result = optimistic(
            &mut self.state,
            |state| {
                state.items.retain(|item| item.id != item_id);
                state.recompute_totals();
            },
            call,
        )
        .await;
        self.loading = false;

        self.reconcile(result)
    }

    /// Empty the cart, optimistically.
    pub async fn clear_cart(&mut self) -> Result<(), ApiError> {
        let api = Arc::clone(&self.api);
        let call = async move { api.clear_cart().await };

        self.loading = true;
        let result = optimistic(
            &mut self.state,
            |state| {
                state.items.clear();
                state.recompute_totals();
            },
            call,
        )
        .await;
        self.loading = false;

        match self.reconcile(result) {
            Ok(()) => {
                self.notifier.success("Cart cleared");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Fold the guest cart into the signed-in user's cart. Best effort:
    /// on failure the guest session token is kept so a later attempt can
    /// still find the guest cart.
    pub async fn merge_cart(&mut self) {
        match self.api.merge_cart().await {
            Ok(cart) => {
                self.state.adopt(cart);
                self.persist();
                session::clear_session(self.storage.as_ref());
            }
            Err(err) => {
                tracing::warn!(%err, "guest cart merge failed");
            }
        }
    }

    /// Adopt the server snapshot on success; persist whichever state won
    /// (the snapshot, or the rolled-back original) either way.
    fn reconcile(&mut self, result: Result<Cart, ApiError>) -> Result<(), ApiError> {
        let out = match result {
            Ok(cart) => {
                self.state.adopt(cart);
                Ok(())
            }
            Err(err) => Err(err),
        };
        self.persist();
        out
    }
}
