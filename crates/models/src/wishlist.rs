//! Wishlist resource: membership records, no quantity or price.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopfront_core::{Money, ProductId};
use uuid::Uuid;

/// Image reference embedded in wishlist product details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistProductImage {
    pub id: Uuid,
    pub image_url: String,
    pub is_primary: bool,
}

/// Product details embedded in a wishlist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistProduct {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub price: Money,
    #[serde(default)]
    pub compare_price: Option<Money>,
    pub stock_quantity: i64,
    pub is_active: bool,
    #[serde(default)]
    pub images: Option<Vec<WishlistProductImage>>,
}

/// One (user, product) membership record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: Uuid,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
    pub product: WishlistProduct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistResponse {
    pub items: Vec<WishlistItem>,
    pub count: u32,
}
