//! Product types and the purchase contract.

use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::promotion::Promotion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock behavior of a product.
///
/// A closed set: behavior differences are limited to purchase-quantity
/// validation and stock bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProductKind {
    /// Regular stocked product.
    #[default]
    Standard,
    /// Digital or service item with no stock to track.
    NonStocked,
    /// Stocked product capped at a per-order maximum.
    Limited { max_per_order: i64 },
}

/// A product in the catalog.
///
/// Activity is derived, not stored: a stocked product is active while it
/// has stock, a non-stocked product is always active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: i64,
    kind: ProductKind,
    promotion: Option<Promotion>,
}

impl Product {
    /// Create a regular stocked product.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
    ) -> Result<Self, StoreError> {
        Self::build(name.into(), price, quantity, ProductKind::Standard)
    }

    /// Create a non-stocked product (e.g., a license or a service).
    ///
    /// Quantity is pinned at zero and never decremented; the product is
    /// always active.
    pub fn non_stocked(name: impl Into<String>, price: Money) -> Result<Self, StoreError> {
        Self::build(name.into(), price, 0, ProductKind::NonStocked)
    }

    /// Create a stocked product with a per-order purchase maximum.
    pub fn limited(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        max_per_order: i64,
    ) -> Result<Self, StoreError> {
        if max_per_order <= 0 {
            return Err(StoreError::InvalidPurchaseLimit(max_per_order));
        }
        Self::build(name.into(), price, quantity, ProductKind::Limited { max_per_order })
    }

    fn build(
        name: String,
        price: Money,
        quantity: i64,
        kind: ProductKind,
    ) -> Result<Self, StoreError> {
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if price.is_negative() {
            return Err(StoreError::NegativePrice(price));
        }
        if quantity < 0 {
            return Err(StoreError::NegativeQuantity(quantity));
        }
        Ok(Self {
            id: ProductId::generate(),
            name,
            price,
            quantity,
            kind,
            promotion: None,
        })
    }

    /// The product's id.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// The product's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// The stock behavior of this product.
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Current stock. Always zero for non-stocked products.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Replace the current stock level.
    ///
    /// Non-stocked products carry no stock; their quantity stays zero.
    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), StoreError> {
        if quantity < 0 {
            return Err(StoreError::NegativeQuantity(quantity));
        }
        if self.tracks_stock() {
            self.quantity = quantity;
        }
        Ok(())
    }

    /// Whether the product is eligible for listing and purchase.
    pub fn is_active(&self) -> bool {
        match self.kind {
            ProductKind::NonStocked => true,
            _ => self.quantity > 0,
        }
    }

    /// Attach or detach a promotion.
    pub fn set_promotion(&mut self, promotion: Option<Promotion>) {
        self.promotion = promotion;
    }

    /// The attached promotion, if any.
    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_ref()
    }

    /// Purchase `quantity` units and return the total charged.
    ///
    /// Pricing delegates to the attached promotion when one is present;
    /// stock is decremented only after pricing succeeds, and never for
    /// non-stocked products.
    pub fn buy(&mut self, quantity: i64) -> Result<Money, StoreError> {
        if quantity <= 0 {
            return Err(StoreError::InvalidPurchaseQuantity(quantity));
        }
        if let ProductKind::Limited { max_per_order } = self.kind {
            if quantity > max_per_order {
                return Err(StoreError::PurchaseLimitExceeded {
                    requested: quantity,
                    max: max_per_order,
                });
            }
        }
        if self.tracks_stock() && quantity > self.quantity {
            return Err(StoreError::OutOfStock {
                requested: quantity,
                available: self.quantity,
            });
        }

        let total = match &self.promotion {
            Some(promotion) => promotion.apply(self.price, quantity),
            None => self.price.multiply(quantity),
        };

        if self.tracks_stock() {
            self.quantity -= quantity;
        }
        Ok(total)
    }

    fn tracks_stock(&self) -> bool {
        !matches!(self.kind, ProductKind::NonStocked)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Price: {}", self.name, self.price)?;
        match self.kind {
            ProductKind::NonStocked => write!(f, ", Quantity: Unlimited")?,
            ProductKind::Limited { max_per_order } => write!(
                f,
                ", Quantity: {}, Limited to {} per order",
                self.quantity, max_per_order
            )?,
            ProductKind::Standard => write!(f, ", Quantity: {}", self.quantity)?,
        }
        if let Some(promotion) = &self.promotion {
            write!(f, ", Promotion: {}", promotion.name())?;
        }
        Ok(())
    }
}
