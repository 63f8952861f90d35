//! Product records and the read-only catalog.
//!
//! The catalog is owned outside the cart; the cart only reads prices from it when
//! computing [`total_price`](crate::selectors::total_price).

use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a product in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, rename = "imageURL")]
    pub image_url: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Product name
    /// * `price` - Unit price
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: String::new(),
        }
    }
}

/// Product id to product record.
pub type ProductCatalog = HashMap<ProductId, Product>;

/// Builds a catalog keyed by each product's own id. Later duplicates win.
pub fn catalog_from_products(products: impl IntoIterator<Item = Product>) -> ProductCatalog {
    products
        .into_iter()
        .map(|product| (product.id.clone(), product))
        .collect()
}
