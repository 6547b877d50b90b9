//! Promotion pricing strategies.
//!
//! A promotion is a pure function of unit price and purchase quantity.
//! Stock bookkeeping stays with the product; applying a promotion never
//! changes store state.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A named promotion attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    /// Display name (e.g., "Second one half price!").
    name: String,
    /// The pricing rule.
    rule: PromotionRule,
}

/// The fixed set of pricing rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PromotionRule {
    /// Flat percentage off the undiscounted total.
    PercentDiscount { percent: f64 },
    /// Units pair up; the second unit of each pair is charged at half price.
    SecondHalfPrice,
    /// Every complete group of three units includes one free unit.
    ThirdOneFree,
}

impl Promotion {
    /// Create a percentage discount promotion.
    pub fn percent_discount(name: impl Into<String>, percent: f64) -> Self {
        Self {
            name: name.into(),
            rule: PromotionRule::PercentDiscount { percent },
        }
    }

    /// Create a second-unit-half-price promotion.
    pub fn second_half_price(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rule: PromotionRule::SecondHalfPrice,
        }
    }

    /// Create a third-unit-free promotion.
    pub fn third_one_free(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rule: PromotionRule::ThirdOneFree,
        }
    }

    /// The promotion's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pricing rule.
    pub fn rule(&self) -> PromotionRule {
        self.rule
    }

    /// Price a purchase of `quantity` units at `unit_price`.
    pub fn apply(&self, unit_price: Money, quantity: i64) -> Money {
        self.rule.apply(unit_price, quantity)
    }
}

impl PromotionRule {
    /// Calculate the total price for a purchase.
    pub fn apply(&self, unit_price: Money, quantity: i64) -> Money {
        match *self {
            PromotionRule::PercentDiscount { percent } => unit_price
                .multiply(quantity)
                .multiply_decimal(1.0 - percent / 100.0),
            PromotionRule::SecondHalfPrice => {
                if quantity < 2 {
                    return unit_price.multiply(quantity);
                }
                // The odd unit lands in the half-price bucket.
                let full_price_units = quantity / 2;
                let half_price_units = quantity - full_price_units;
                unit_price.multiply(full_price_units)
                    + unit_price.multiply(half_price_units).multiply_decimal(0.5)
            }
            PromotionRule::ThirdOneFree => {
                let free_units = quantity / 3;
                unit_price.multiply(quantity - free_units)
            }
        }
    }
}
