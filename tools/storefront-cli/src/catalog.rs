//! Catalog file loading and the built-in seed.

use anyhow::{Context, Result};
use serde::Deserialize;
use storefront_core::{Money, Product, Promotion, Store};

/// Catalog file schema (TOML).
///
/// ```toml
/// [[product]]
/// name = "MacBook Air M2"
/// price = 1450.0
/// quantity = 100
/// promotion = { name = "30% off!", kind = "percent-discount", percent = 30.0 }
///
/// [[product]]
/// name = "Shipping"
/// price = 10.0
/// quantity = 250
/// kind = "limited"
/// max_per_order = 1
/// ```
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub product: Vec<ProductEntry>,
}

/// One product entry in a catalog file.
#[derive(Debug, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    /// Unit price in dollars.
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub kind: EntryKind,
    /// Per-order maximum, required for `kind = "limited"`.
    pub max_per_order: Option<i64>,
    pub promotion: Option<PromotionEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    #[default]
    Standard,
    NonStocked,
    Limited,
}

/// Promotion attached to a product entry.
#[derive(Debug, Deserialize)]
pub struct PromotionEntry {
    pub name: String,
    pub kind: PromotionKindEntry,
    /// Required for `kind = "percent-discount"`.
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromotionKindEntry {
    PercentDiscount,
    SecondHalfPrice,
    ThirdOneFree,
}

impl PromotionEntry {
    fn into_promotion(self) -> Result<Promotion> {
        Ok(match self.kind {
            PromotionKindEntry::PercentDiscount => {
                let percent = self.percent.with_context(|| {
                    format!("Promotion '{}' needs a percent value", self.name)
                })?;
                Promotion::percent_discount(self.name, percent)
            }
            PromotionKindEntry::SecondHalfPrice => Promotion::second_half_price(self.name),
            PromotionKindEntry::ThirdOneFree => Promotion::third_one_free(self.name),
        })
    }
}

/// Load a store from a TOML catalog file.
pub fn load(path: &str) -> Result<Store> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path))?;
    let file: CatalogFile =
        toml::from_str(&content).with_context(|| format!("Failed to parse TOML catalog: {}", path))?;
    build(file)
}

fn build(file: CatalogFile) -> Result<Store> {
    let mut store = Store::default();
    for entry in file.product {
        let price = Money::from_decimal(entry.price);
        let mut product = match entry.kind {
            EntryKind::Standard => Product::new(entry.name.as_str(), price, entry.quantity),
            EntryKind::NonStocked => Product::non_stocked(entry.name.as_str(), price),
            EntryKind::Limited => {
                let max = entry.max_per_order.with_context(|| {
                    format!("Product '{}' is limited but has no max_per_order", entry.name)
                })?;
                Product::limited(entry.name.as_str(), price, entry.quantity, max)
            }
        }
        .with_context(|| format!("Invalid product '{}'", entry.name))?;

        if let Some(promotion) = entry.promotion {
            product.set_promotion(Some(promotion.into_promotion()?));
        }
        store.add_product(product);
    }
    Ok(store)
}

/// The built-in seed catalog.
pub fn seed() -> Result<Store> {
    let mut store = Store::default();

    let mut macbook = Product::new("MacBook Air M2", Money::from_decimal(1450.0), 100)?;
    macbook.set_promotion(Some(Promotion::percent_discount("30% off!", 30.0)));
    store.add_product(macbook);

    let mut earbuds =
        Product::new("Bose QuietComfort Earbuds", Money::from_decimal(250.0), 500)?;
    earbuds.set_promotion(Some(Promotion::second_half_price("Second one half price!")));
    store.add_product(earbuds);

    let mut pixel = Product::new("Google Pixel 7", Money::from_decimal(500.0), 250)?;
    pixel.set_promotion(Some(Promotion::third_one_free("Third one free!")));
    store.add_product(pixel);

    store.add_product(Product::non_stocked(
        "Windows License",
        Money::from_decimal(125.0),
    )?);
    store.add_product(Product::limited(
        "Shipping",
        Money::from_decimal(10.0),
        250,
        1,
    )?);

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductKind;

    #[test]
    fn test_seed_catalog() {
        let store = seed().unwrap();
        assert_eq!(store.products().len(), 5);
        assert_eq!(store.total_quantity(), 850);
        assert_eq!(store.active_products().count(), 5);
    }

    #[test]
    fn test_parse_catalog_file() {
        let file: CatalogFile = toml::from_str(
            r#"
            [[product]]
            name = "MacBook Air M2"
            price = 1450.0
            quantity = 100
            promotion = { name = "30% off!", kind = "percent-discount", percent = 30.0 }

            [[product]]
            name = "Windows License"
            price = 125.0
            kind = "non-stocked"

            [[product]]
            name = "Shipping"
            price = 10.0
            quantity = 250
            kind = "limited"
            max_per_order = 1
            "#,
        )
        .unwrap();
        let store = build(file).unwrap();

        assert_eq!(store.products().len(), 3);
        let macbook = &store.products()[0];
        assert_eq!(macbook.price(), Money::from_decimal(1450.0));
        assert_eq!(macbook.promotion().unwrap().name(), "30% off!");

        assert_eq!(store.products()[1].kind(), ProductKind::NonStocked);
        assert_eq!(
            store.products()[2].kind(),
            ProductKind::Limited { max_per_order: 1 }
        );
    }

    #[test]
    fn test_limited_entry_requires_maximum() {
        let file: CatalogFile = toml::from_str(
            r#"
            [[product]]
            name = "Shipping"
            price = 10.0
            quantity = 250
            kind = "limited"
            "#,
        )
        .unwrap();
        let err = build(file).unwrap_err();
        assert!(err.to_string().contains("max_per_order"));
    }

    #[test]
    fn test_percent_promotion_requires_percent() {
        let file: CatalogFile = toml::from_str(
            r#"
            [[product]]
            name = "MacBook Air M2"
            price = 1450.0
            quantity = 100
            promotion = { name = "30% off!", kind = "percent-discount" }
            "#,
        )
        .unwrap();
        assert!(build(file).is_err());
    }

    #[test]
    fn test_invalid_product_is_rejected() {
        let file: CatalogFile = toml::from_str(
            r#"
            [[product]]
            name = ""
            price = 10.0
            quantity = 1
            "#,
        )
        .unwrap();
        assert!(build(file).is_err());
    }
}
