//! `shopfront-api` — HTTP adapter for the storefront backend.
//!
//! One `ApiClient` owns the cross-cutting request policy: bearer-token
//! attachment from client storage, the guest-session header, and a single
//! status classifier that turns failures into user-facing notifications.
//! Callers never branch on HTTP status themselves.
//!
//! Each backend resource is exposed as an `async_trait` endpoint trait
//! implemented by `ApiClient`, so stores stay testable against in-memory
//! fakes.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod notify;
pub mod session;

pub use client::{ApiClient, TOKEN_KEY};
pub use endpoints::admin::{AdminApi, ImageUpload};
pub use endpoints::auth::AuthApi;
pub use endpoints::cart::CartApi;
pub use endpoints::orders::OrdersApi;
pub use endpoints::payments::PaymentsApi;
pub use endpoints::products::ProductsApi;
pub use endpoints::reviews::ReviewsApi;
pub use endpoints::wishlist::WishlistApi;
pub use error::ApiError;
pub use notify::{Notifier, NullNotifier, TracingNotifier};
