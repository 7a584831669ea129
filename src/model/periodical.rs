/// Represents a periodical: a [`PrintItem`] that appears on a fixed
/// [`Cadence`].
///
/// # Architecture Note
/// This is a *variant*, not a subclass. `Periodical` composes the base
/// item and delegates the shared fields and the price invariant to it;
/// only the cadence and the catalog-line suffix are its own.
use serde::Serialize;
use std::fmt::Display;

use crate::model::{Cadence, CatalogError, CatalogItem, PrintItem};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Periodical {
    pub base: PrintItem,
    pub cadence: Cadence,
}

impl Periodical {
    /// Creates a new Periodical instance.
    ///
    /// # Errors
    /// Returns [`CatalogError::PriceOutOfRange`] under the same rule as
    /// [`PrintItem::new`].
    pub fn new(
        isbn: impl Into<String>,
        name: impl Into<String>,
        publisher: impl Into<String>,
        price: f64,
        cadence: Cadence,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            base: PrintItem::new(isbn, name, publisher, price)?,
            cadence,
        })
    }
}

impl Display for Periodical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - Verschijnt {}", self.base, self.cadence)
    }
}

impl CatalogItem for Periodical {
    fn isbn(&self) -> &str {
        self.base.isbn()
    }

    fn price(&self) -> f64 {
        self.base.price()
    }

    fn set_price(&mut self, price: f64) -> Result<(), CatalogError> {
        self.base.set_price(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_the_cadence_to_the_catalog_line() {
        let magazine = Periodical::new(
            "123-4-567-89012-3",
            "Wetenschap Vandaag",
            "Uitgeverij Z",
            8.0,
            Cadence::Monthly,
        )
        .unwrap();
        assert_eq!(
            magazine.display(),
            "Wetenschap Vandaag (ISBN: 123-4-567-89012-3) - Uitgeverij Z - €8 - Verschijnt Monthly"
        );
    }

    #[test]
    fn shares_the_price_rule_with_the_base_item() {
        assert_eq!(
            Periodical::new("i", "n", "p", 4.0, Cadence::Daily).unwrap_err(),
            CatalogError::PriceOutOfRange(4.0)
        );

        let mut magazine = Periodical::new("i", "n", "p", 10.0, Cadence::Weekly).unwrap();
        assert!(magazine.set_price(0.5).is_err());
        assert_eq!(magazine.price(), 10.0);
        magazine.set_price(12.0).unwrap();
        assert_eq!(magazine.price(), 12.0);
    }

    #[test]
    fn dispatches_display_through_the_trait() {
        let items: Vec<Box<dyn CatalogItem>> = vec![
            Box::new(PrintItem::new("b", "Book", "P", 20.0).unwrap()),
            Box::new(Periodical::new("m", "Mag", "P", 8.0, Cadence::Daily).unwrap()),
        ];
        assert_eq!(items[0].display(), "Book (ISBN: b) - P - €20");
        assert_eq!(items[1].display(), "Mag (ISBN: m) - P - €8 - Verschijnt Daily");
    }
}
