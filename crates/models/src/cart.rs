//! Cart resource: snapshot and mutation request shapes.

use serde::{Deserialize, Serialize};
use shopfront_core::{CartId, CartItemId, Money, ProductId};

/// Product details embedded in a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemProduct {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub price: Money,
    pub compare_price: Option<Money>,
    pub stock_quantity: i64,
    pub image: Option<String>,
}

/// One line of the cart, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub product: CartItemProduct,
    pub quantity: u32,
    /// Unit price at the time the line was added.
    pub price: Money,
    pub line_total: Money,
}

/// Authoritative cart snapshot as returned by every cart endpoint.
///
/// `subtotal` and `item_count` are computed server-side; the client never
/// derives them independently except for the optimistic intermediate frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub items: Vec<CartItem>,
    pub subtotal: Money,
    #[serde(rename = "itemCount")]
    pub item_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: u32,
}
