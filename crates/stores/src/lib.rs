//! `shopfront-stores` — client-side state containers.
//!
//! Each store owns one slice of application state, mutates it through an
//! endpoint trait, and persists a schema-versioned slice after every
//! transition. Server-reconciled mutations either adopt the returned
//! snapshot or roll back to the pre-mutation state; the backend stays the
//! single source of truth for anything it computes.
//!
//! Stores are generic over their endpoint trait so tests run against
//! in-memory fakes instead of a live backend.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod optimistic;
pub mod payments;
pub mod wishlist;

pub use auth::AuthStore;
pub use cart::{CartState, CartStore};
pub use checkout::{CheckoutError, CheckoutStep, CheckoutStore};
pub use optimistic::optimistic;
pub use payments::{PaymentFlow, PaymentHandoff};
pub use wishlist::WishlistStore;
