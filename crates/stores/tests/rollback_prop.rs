//! Property test: a failed optimistic mutation always restores the exact
//! pre-mutation cart state, whatever the cart looked like.

use std::sync::Arc;

use async_trait::async_trait;
use proptest::prelude::*;
use shopfront_api::{
    ApiError, CartApi, NullNotifier,
};
use shopfront_core::{CartId, CartItemId, Money, ProductId, line_total};
use shopfront_models::{AddToCartRequest, Cart, CartItem, CartItemProduct, UpdateCartItemRequest};
use shopfront_storage::{MemoryStorage, slice};
use shopfront_stores::{CartState, CartStore};

struct UnavailableBackend;

#[async_trait]
impl CartApi for UnavailableBackend {
    async fn fetch_cart(&self) -> Result<Cart, ApiError> {
        Err(ApiError::Server(503))
    }

    async fn add_to_cart(&self, _req: &AddToCartRequest) -> Result<Cart, ApiError> {
        Err(ApiError::Server(503))
    }

    async fn update_cart_item(
        &self,
        _item_id: CartItemId,
        _req: &UpdateCartItemRequest,
    ) -> Result<Cart, ApiError> {
        Err(ApiError::Server(503))
    }

    async fn remove_cart_item(&self, _item_id: CartItemId) -> Result<Cart, ApiError> {
        Err(ApiError::Server(503))
    }

    async fn clear_cart(&self) -> Result<Cart, ApiError> {
        Err(ApiError::Server(503))
    }

    async fn merge_cart(&self) -> Result<Cart, ApiError> {
        Err(ApiError::Server(503))
    }
}

fn item(cents: i64, quantity: u32) -> CartItem {
    let price: Money = Money::new(cents, 2);
    let product_id = ProductId::new();
    CartItem {
        id: CartItemId::new(),
        product_id,
        product: CartItemProduct {
            id: product_id,
            name: "P".into(),
            slug: "p".into(),
            price,
            compare_price: None,
            stock_quantity: 1000,
            image: None,
        },
        quantity,
        price,
        line_total: line_total(price, quantity),
    }
}

fn cart_state_strategy() -> impl Strategy<Value = CartState> {
    prop::collection::vec((1i64..100_000, 1u32..20), 0..6).prop_map(|lines| {
        let items: Vec<CartItem> = lines
            .into_iter()
            .map(|(cents, quantity)| item(cents, quantity))
            .collect();
        let mut state = CartState {
            cart_id: Some(CartId::new()),
            items,
            subtotal: Money::ZERO,
            item_count: 0,
        };
        state.recompute_totals();
        state
    })
}

proptest! {
    #[test]
    fn failed_mutations_restore_the_exact_state(
        state in cart_state_strategy(),
        target in any::<prop::sample::Index>(),
        new_quantity in 1u32..50,
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let storage = Arc::new(MemoryStorage::new());
            slice::save_slice(storage.as_ref(), "cart-storage", 1, &state).unwrap();

            let mut cart = CartStore::new(
                Arc::new(UnavailableBackend),
                storage,
                Arc::new(NullNotifier),
            );
            prop_assert_eq!(cart.state(), &state);

            if !state.items.is_empty() {
                let item_id = state.items[target.index(state.items.len())].id;

                cart.update_quantity(item_id, new_quantity).await.unwrap_err();
                prop_assert_eq!(cart.state(), &state);

                cart.remove_item(item_id).await.unwrap_err();
                prop_assert_eq!(cart.state(), &state);
            }

            cart.clear_cart().await.unwrap_err();
            prop_assert_eq!(cart.state(), &state);
            Ok(())
        })?;
    }
}
