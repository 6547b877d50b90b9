//! Domain error types.

use crate::ids::ProductId;
use crate::money::Money;
use thiserror::Error;

/// Errors that can occur in catalog and store operations.
///
/// Every variant is raised eagerly at the point of mutation or purchase;
/// nothing is deferred or batched.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Product name is empty.
    #[error("Product name cannot be empty")]
    EmptyName,

    /// Price below zero.
    #[error("Price cannot be negative: {0}")]
    NegativePrice(Money),

    /// Stock quantity below zero.
    #[error("Quantity cannot be negative: {0}")]
    NegativeQuantity(i64),

    /// Purchase quantity must be positive.
    #[error("Purchase quantity must be greater than zero: {0}")]
    InvalidPurchaseQuantity(i64),

    /// Not enough stock to fulfill a purchase.
    #[error("Not enough stock: requested {requested}, available {available}")]
    OutOfStock { requested: i64, available: i64 },

    /// Purchase exceeds a limited product's per-order maximum.
    #[error("Quantity {requested} exceeds the per-order maximum ({max})")]
    PurchaseLimitExceeded { requested: i64, max: i64 },

    /// A limited product's per-order maximum must be positive.
    #[error("Per-order maximum must be greater than zero: {0}")]
    InvalidPurchaseLimit(i64),

    /// Arithmetic overflow while summing an order total.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Product not found in the store.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}
