//! Money representation.
//!
//! The backend serializes monetary amounts as plain JSON numbers, so money
//! is `rust_decimal::Decimal` behind the `serde-float` feature. The client
//! never computes totals on its own authority; the only local arithmetic is
//! the optimistic line total shown while a mutation is in flight.

use rust_decimal::Decimal;

/// A monetary amount in the cart's currency.
pub type Money = Decimal;

/// Line total for an optimistic frame: `unit price * quantity`.
pub fn line_total(unit_price: Money, quantity: u32) -> Money {
    unit_price * Decimal::from(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_scales_unit_price() {
        let price: Money = "10.00".parse().unwrap();
        assert_eq!(line_total(price, 3), "30.00".parse::<Money>().unwrap());
        assert_eq!(line_total(price, 0), Money::ZERO);
    }
}
