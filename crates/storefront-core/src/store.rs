//! The store aggregate.

use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::product::Product;
use serde::{Deserialize, Serialize};

/// A store owning an ordered collection of products.
///
/// Insertion order is display order. The collection is not keyed by name;
/// products are addressed by their [`ProductId`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Create a store from an initial product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Add a product and return its id.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id();
        self.products.push(product);
        id
    }

    /// Remove a product. Returns the removed product, or `None` when no
    /// product with this id is owned by the store.
    pub fn remove_product(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id() == id)?;
        Some(self.products.remove(index))
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Look up a product by id for mutation.
    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// All owned products in store order, inactive ones included.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Active products in store order, computed fresh on every call.
    pub fn active_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_active())
    }

    /// Total stock across all owned products, inactive and non-stocked
    /// entries included (contributing zero).
    pub fn total_quantity(&self) -> i64 {
        self.products.iter().map(|p| p.quantity()).sum()
    }

    /// Process a shopping list and return the total cost.
    ///
    /// Purchases are applied in the given order. The first failure
    /// propagates immediately; purchases already applied stay committed.
    /// There is no rollback.
    pub fn order(&mut self, shopping_list: &[(ProductId, i64)]) -> Result<Money, StoreError> {
        let mut total = Money::zero();
        for &(id, quantity) in shopping_list {
            let product = self
                .product_mut(id)
                .ok_or(StoreError::ProductNotFound(id))?;
            let cost = product.buy(quantity)?;
            total = total.checked_add(cost).ok_or(StoreError::Overflow)?;
        }
        Ok(total)
    }
}
