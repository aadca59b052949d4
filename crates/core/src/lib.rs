//! `shopfront-core` — shared building blocks for the storefront client.
//!
//! Typed identifiers, the domain error model and money helpers. No
//! networking or storage concerns here.

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::{CartId, CartItemId, CategoryId, OrderId, ProductId, ReviewId, UserId};
pub use money::{Money, line_total};
