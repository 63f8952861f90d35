//! # Derived Selectors
//!
//! Read-only aggregates over cart state and the catalog.
//!
//! - [`total_count`] / [`select_total_count`]: plain, uncached item count.
//! - [`total_price`]: plain price aggregation, rounded to a whole number.
//! - [`CartSelectors`]: the same projections memoized on input identity. Asking again with
//!   the same `items` (and, for price, the same catalog) `Arc` returns the cached value,
//!   so consumers can compare results by pointer to skip downstream work.
//!
//! ```rust
//! use cart_store::model::{CartItems, CartState, Product, ProductId, catalog_from_products};
//! use cart_store::selectors::CartSelectors;
//! use std::sync::Arc;
//!
//! let mut items = CartItems::new();
//! items.insert(ProductId::from("A"), 2);
//! let state = CartState::with_items(items);
//! let catalog = Arc::new(catalog_from_products(vec![Product::new("A", "Apple", 3.0)]));
//!
//! let selectors = CartSelectors::new();
//! assert_eq!(selectors.total_count(&state), 2);
//! assert_eq!(&*selectors.total_price(&state, &catalog).unwrap(), "6");
//! ```

pub mod memo;

pub use memo::{Inputs, Memo};

use crate::cart::CartError;
use crate::model::{CartItems, CartState, ProductCatalog};
use std::sync::Arc;

/// Sum of all quantities.
pub fn total_count(items: &CartItems) -> i64 {
    items
        .values()
        .fold(0i64, |count, quantity| count.saturating_add(*quantity))
}

/// Uncached total count straight off the state.
pub fn select_total_count(state: &CartState) -> i64 {
    total_count(&state.items)
}

/// `Σ quantity × price`, rounded to the nearest integer, without a fractional part.
///
/// Products are summed in id order, so the float total does not depend on map iteration.
/// Every product in `items` must be in `catalog`; the lowest id that is not fails the whole
/// aggregation with [`CartError::UnknownProduct`].
pub fn total_price(items: &CartItems, catalog: &ProductCatalog) -> Result<String, CartError> {
    let mut entries: Vec<_> = items.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut total = 0.0_f64;
    for (id, quantity) in entries {
        let product = catalog
            .get(id)
            .ok_or_else(|| CartError::UnknownProduct(id.clone()))?;
        total += product.price * *quantity as f64;
    }
    Ok(format_whole(total))
}

/// Rounds half away from zero and prints no decimals. Negative zero prints as "0".
fn format_whole(total: f64) -> String {
    let rounded = total.round() + 0.0;
    format!("{rounded:.0}")
}

type PriceInputs = (Arc<CartItems>, Arc<ProductCatalog>);

/// Memoized count and price selectors.
///
/// Each selector keeps one slot: the last inputs it saw and the result for them.
pub struct CartSelectors {
    count: Memo<Arc<CartItems>, i64>,
    price: Memo<PriceInputs, Result<Arc<str>, CartError>>,
}

impl Default for CartSelectors {
    fn default() -> Self {
        Self::new()
    }
}

impl CartSelectors {
    pub fn new() -> Self {
        Self {
            count: Memo::new(|items: &Arc<CartItems>| total_count(items)),
            price: Memo::new(|(items, catalog): &PriceInputs| {
                total_price(items, catalog).map(Arc::from)
            }),
        }
    }

    pub fn total_count(&self, state: &CartState) -> i64 {
        self.count.get(&state.items)
    }

    /// The rendered total. Unchanged inputs give back the very same `Arc`.
    pub fn total_price(
        &self,
        state: &CartState,
        catalog: &Arc<ProductCatalog>,
    ) -> Result<Arc<str>, CartError> {
        self.price.get(&(state.items.clone(), catalog.clone()))
    }

    pub fn count_recomputations(&self) -> u64 {
        self.count.recomputations()
    }

    pub fn price_recomputations(&self) -> u64 {
        self.price.recomputations()
    }

    pub fn reset_recomputations(&self) {
        self.count.reset_recomputations();
        self.price.reset_recomputations();
    }
}
