//! `shopfront-models` — wire types for the storefront backend.
//!
//! Every struct here matches an API request or response shape byte-for-byte
//! (field names included); serde renames bridge the backend's mixed
//! snake_case/camelCase conventions. No behavior lives in this crate beyond
//! trivial accessors.

pub mod admin;
pub mod cart;
pub mod order;
pub mod page;
pub mod payment;
pub mod product;
pub mod review;
pub mod user;
pub mod wishlist;

pub use cart::{AddToCartRequest, Cart, CartItem, CartItemProduct, UpdateCartItemRequest};
pub use order::{
    CreateOrderRequest, Order, OrderItem, OrderQuery, OrderStatus, OrdersResponse, PaymentMethod,
    PaymentStatus, ShippingAddress, ShippingAddressInput,
};
pub use page::PageMeta;
pub use payment::{PaymentStatusView, StripeConfig, StripePaymentIntent, VnpayPaymentUrl};
pub use product::{Category, Product, ProductImage, ProductQuery, ProductsResponse};
pub use review::{CreateReviewRequest, Review, ReviewQuery, ReviewStats, ReviewsResponse};
pub use user::{
    AuthSession, ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest, Role,
    User,
};
pub use wishlist::{WishlistItem, WishlistProduct, WishlistResponse};
