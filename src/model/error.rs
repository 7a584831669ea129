//! Error types for the catalog item hierarchy.

use thiserror::Error;

/// Lowest price (in euro) a catalog item may carry.
pub const MIN_PRICE: f64 = 5.0;

/// Highest price (in euro) a catalog item may carry.
pub const MAX_PRICE: f64 = 50.0;

/// Errors that can occur while creating or updating catalog items.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The supplied price falls outside the allowed `[MIN_PRICE, MAX_PRICE]`
    /// range. The offending value is carried for the caller's diagnostics;
    /// the item it was aimed at is left untouched.
    #[error("Price must be between €{MIN_PRICE} and €{MAX_PRICE}, got €{0}")]
    PriceOutOfRange(f64),
}
