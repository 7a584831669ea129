//! # CatalogItem Trait
//!
//! The `CatalogItem` trait defines the contract every orderable item
//! (`PrintItem`, `Periodical`, …) must implement. It gives the rest of the
//! system a uniform way to read an item's identity and price and to render
//! its catalog line, without branching on the concrete variant.
//!
//! # Architecture Note
//! Why a trait instead of a base struct?
//! The item hierarchy is a *closed set of variants*, not a subclass tree.
//! `Periodical` composes a `PrintItem` rather than inheriting from it, and
//! both variants satisfy this one contract. Any code holding a
//! `&dyn CatalogItem` (or a generic `T: CatalogItem`) gets the correct
//! variant-specific catalog line via `display()`.

use crate::model::CatalogError;
use std::fmt::{Debug, Display};

/// Contract for anything that can be listed in the catalog and ordered.
///
/// Requiring [`Display`] keeps the formatting logic on the type itself;
/// `display()` is a convenience that materializes it as a `String`.
pub trait CatalogItem: Display + Debug {
    /// The item's opaque ISBN identifier. Not validated for format.
    fn isbn(&self) -> &str;

    /// Current price in euro. Always within `[MIN_PRICE, MAX_PRICE]`.
    fn price(&self) -> f64;

    /// Replaces the stored price after re-validating the range rule.
    /// On rejection the previous price stays in place.
    fn set_price(&mut self, price: f64) -> Result<(), CatalogError>;

    /// Renders the catalog line for this item.
    fn display(&self) -> String {
        self.to_string()
    }
}
