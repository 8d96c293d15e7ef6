//! Special-offer discount policy.
//!
//! Games and consoles on special are sold at a fixed 10% off list price.
//! Accessories are never discounted, even when flagged on special.

use gamestore_core::{EntityKind, Price};

/// Fraction taken off the list price of a discountable item.
pub const SPECIAL_OFFER_DISCOUNT: f64 = 0.10;

/// Price an item of `kind` sells for while on special.
pub fn discounted_price(kind: EntityKind, price: Price) -> Price {
    match kind {
        EntityKind::Game | EntityKind::Console => price.scaled(1.0 - SPECIAL_OFFER_DISCOUNT),
        EntityKind::Accessory => price,
    }
}
