/// Represents a priced book in the catalog.
///
/// # Price Invariant
/// The price must lie in the inclusive range
/// [[`MIN_PRICE`], [`MAX_PRICE`]] at all times. Construction and every
/// later [`set_price`](PrintItem::set_price) re-validate it; a rejected
/// value never becomes observable.
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, warn};

use crate::model::{CatalogError, CatalogItem, MAX_PRICE, MIN_PRICE};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PrintItem {
    pub isbn: String,
    pub name: String,
    pub publisher: String,
    price: f64,
}

/// Validates the range rule shared by all catalog items.
pub(crate) fn check_price(price: f64) -> Result<f64, CatalogError> {
    if (MIN_PRICE..=MAX_PRICE).contains(&price) {
        Ok(price)
    } else {
        warn!(price, "Rejected out-of-range price");
        Err(CatalogError::PriceOutOfRange(price))
    }
}

impl PrintItem {
    /// Creates a new PrintItem instance.
    ///
    /// # Arguments
    /// * `isbn` - Opaque identifier, not validated for format
    /// * `name` - Display label
    /// * `publisher` - Display label
    /// * `price` - Price in euro, must be within `[MIN_PRICE, MAX_PRICE]`
    ///
    /// # Errors
    /// Returns [`CatalogError::PriceOutOfRange`] if the price fails the
    /// range rule; no item comes into existence in that case.
    pub fn new(
        isbn: impl Into<String>,
        name: impl Into<String>,
        publisher: impl Into<String>,
        price: f64,
    ) -> Result<Self, CatalogError> {
        let item = Self {
            isbn: isbn.into(),
            name: name.into(),
            publisher: publisher.into(),
            price: check_price(price)?,
        };
        debug!(isbn = %item.isbn, price, "Catalog item created");
        Ok(item)
    }
}

impl Display for PrintItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (ISBN: {}) - {} - €{}",
            self.name, self.isbn, self.publisher, self.price
        )
    }
}

impl CatalogItem for PrintItem {
    fn isbn(&self) -> &str {
        &self.isbn
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn set_price(&mut self, price: f64) -> Result<(), CatalogError> {
        self.price = check_price(price)?;
        Ok(())
    }
}
