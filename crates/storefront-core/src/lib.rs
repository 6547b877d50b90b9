//! Catalog, promotion, and store domain logic for the storefront simulator.
//!
//! This crate provides the in-memory model behind the interactive store:
//!
//! - **Products**: plain stocked items, non-stocked items (licenses,
//!   services), and items limited to a per-order maximum
//! - **Promotions**: a fixed set of pure pricing strategies applied at
//!   purchase time
//! - **Store**: the aggregate owning all products, with listing, stock
//!   totals, and order processing
//!
//! # Example
//!
//! ```
//! use storefront_core::{Money, Product, Promotion, Store};
//!
//! let mut store = Store::default();
//! let mut earbuds =
//!     Product::new("Bose QuietComfort Earbuds", Money::from_decimal(250.0), 500).unwrap();
//! earbuds.set_promotion(Some(Promotion::second_half_price("Second one half price!")));
//! let earbuds = store.add_product(earbuds);
//!
//! let total = store.order(&[(earbuds, 2)]).unwrap();
//! assert_eq!(total, Money::from_decimal(375.0));
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod product;
pub mod promotion;
pub mod store;

pub use error::StoreError;
pub use ids::ProductId;
pub use money::Money;
pub use product::{Product, ProductKind};
pub use promotion::{Promotion, PromotionRule};
pub use store::Store;
