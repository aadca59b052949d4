//! Wishlist store.
//!
//! Membership-only state: a product is in the wishlist at most once, so
//! the store keeps a `ProductId` set for O(1) membership checks next to
//! the detailed entries used by listing views. Only the id set is
//! persisted; entries are refetched.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shopfront_api::{ApiError, CartApi, Notifier, WishlistApi};
use shopfront_core::ProductId;
use shopfront_models::{WishlistItem, WishlistResponse};
use shopfront_storage::{ClientStorage, slice};

use crate::cart::CartStore;
use crate::optimistic::optimistic;

const SLICE_KEY: &str = "wishlist-storage";
const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistState {
    pub items: Vec<WishlistItem>,
    pub product_ids: HashSet<ProductId>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedWishlist {
    product_ids: HashSet<ProductId>,
}

impl WishlistState {
    fn adopt(&mut self, response: WishlistResponse) {
        self.product_ids = response.items.iter().map(|item| item.product_id).collect();
        self.items = response.items;
    }
}

pub struct WishlistStore<A: WishlistApi> {
    api: Arc<A>,
    storage: Arc<dyn ClientStorage>,
    notifier: Arc<dyn Notifier>,
    state: WishlistState,
    loading: bool,
}

impl<A: WishlistApi> WishlistStore<A> {
    /// Build the store, rehydrating the persisted membership set so the
    /// UI can render wishlist hearts before the first fetch.
    pub fn new(api: Arc<A>, storage: Arc<dyn ClientStorage>, notifier: Arc<dyn Notifier>) -> Self {
        let persisted: PersistedWishlist =
            slice::load_slice(storage.as_ref(), SLICE_KEY, SCHEMA_VERSION).unwrap_or_default();
        Self {
            api,
            storage,
            notifier,
            state: WishlistState {
                items: vec![],
                product_ids: persisted.product_ids,
            },
            loading: false,
        }
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.state.items
    }

    pub fn count(&self) -> usize {
        self.state.product_ids.len()
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.state.product_ids.contains(&product_id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn persist(&self) {
        let persisted = PersistedWishlist {
            product_ids: self.state.product_ids.clone(),
        };
        if let Err(err) =
            slice::save_slice(self.storage.as_ref(), SLICE_KEY, SCHEMA_VERSION, &persisted)
        {
            tracing::warn!(%err, "failed to persist wishlist state");
        }
    }

    /// Refresh membership and entries from the backend.
    pub async fn fetch_wishlist(&mut self) {
        self.loading = true;
        match self.api.fetch_wishlist().await {
            Ok(response) => {
                self.state.adopt(response);
                self.persist();
            }
            Err(err) => {
                tracing::warn!(%err, "wishlist refresh failed");
            }
        }
        self.loading = false;
    }

    /// Add a product, optimistically. The membership set is the
    /// optimistic frame; detailed entries come from the response.
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<(), ApiError> {
        let api = Arc::clone(&self.api);
        let call = async move { api.add_to_wishlist(product_id).await };

        let result = optimistic(
            &mut self.state,
            |state| {
                state.product_ids.insert(product_id);
            },
            call,
        )
        .await;

        match result {
            Ok(response) => {
                self.state.adopt(response);
                self.persist();
                self.notifier.success("Added to wishlist");
                Ok(())
            }
            Err(err) => {
                self.persist();
                Err(err)
            }
        }
    }

    /// Remove a product, optimistically.
    pub async fn remove_product(&mut self, product_id: ProductId) -> Result<(), ApiError> {
        let api = Arc::clone(&self.api);
        let call = async move { api.remove_from_wishlist(product_id).await };

        let result = optimistic(
            &mut self.state,
            |state| {
                state.product_ids.remove(&product_id);
                state.items.retain(|item| item.product_id != product_id);
            },
            call,
        )
        .await;

        self.persist();
        match result {
            Ok(()) => {
                self.notifier.success("Removed from wishlist");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Move a product into the cart in one backend call. The wishlist
    /// removal is optimistic with a single rollback; the cart adopts a
    /// fresh snapshot afterwards since the backend mutated it.
    pub async fn move_to_cart<C: CartApi>(
        &mut self,
        product_id: ProductId,
        cart: &mut CartStore<C>,
    ) -> Result<(), ApiError> {
        let api = Arc::clone(&self.api);
        let call = async move { api.move_to_cart(product_id).await };

        let result = optimistic(
            &mut self.state,
            |state| {
                state.product_ids.remove(&product_id);
                state.items.retain(|item| item.product_id != product_id);
            },
            call,
        )
        .await;

        self.persist();
        match result {
            Ok(()) => {
                cart.fetch_cart().await;
                self.notifier.success("Moved to cart");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Empty the wishlist, optimistically.
    pub async fn clear(&mut self) -> Result<(), ApiError> {
        let api = Arc::clone(&self.api);
        let call = async move { api.clear_wishlist().await };

        let result = optimistic(
            &mut self.state,
            |state| {
                state.product_ids.clear();
                state.items.clear();
            },
            call,
        )
        .await;

        self.persist();
        match result {
            Ok(()) => {
                self.notifier.success("Wishlist cleared");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Drop local wishlist state without touching the backend, for
    /// sign-out: the wishlist is account-scoped.
    pub fn reset(&mut self) {
        self.state = WishlistState::default();
        self.persist();
    }
}
