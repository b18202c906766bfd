//! The storefront discount rule.
//!
//! Products priced strictly above [`DISCOUNT_THRESHOLD`] are shown at
//! [`DISCOUNT_FACTOR`] of their price, rounded to a whole amount. Everything
//! else is shown unchanged. The rule is applied once, to the price received
//! from the API, when a view model is built.

use serde::{Deserialize, Serialize};

pub const DISCOUNT_THRESHOLD: f64 = 50.0;
pub const DISCOUNT_FACTOR: f64 = 0.8;

/// Price to display and whether the discount produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountedPrice {
    pub price: f64,
    pub discounted: bool,
}

/// Apply the discount rule to an original (upstream) price.
///
/// Rounds half away from zero. Negative prices are not validated.
pub fn apply_discount(original_price: f64) -> DiscountedPrice {
    if original_price > DISCOUNT_THRESHOLD {
        DiscountedPrice {
            price: (original_price * DISCOUNT_FACTOR).round(),
            discounted: true,
        }
    } else {
        DiscountedPrice {
            price: original_price,
            discounted: false,
        }
    }
}
