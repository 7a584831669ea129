//! # Order Desk
//!
//! The [`OrderDesk`] is the wiring point for the whole ordering system. It
//! owns the two pieces of shared state the domain needs:
//!
//! 1. **One id sequence for everything**: every order in the process, book
//!    or periodical, draws from the same [`OrderSequence`]. Mixing item
//!    types still yields one strictly increasing id series.
//! 2. **One notification hub per item variant**: book-order handlers and
//!    periodical-order handlers live on separate hubs and never see each
//!    other's placements.
//!
//! Construction performs no I/O and spawns nothing; the desk is plain
//! shared state handed to whoever creates or places orders.

use std::sync::{Arc, RwLock};

use crate::channel::OrderPlacedHub;
use crate::model::{Cadence, CatalogItem, Periodical, PrintItem};
use crate::order::{Order, OrderSequence};

/// Shared state for the ordering workflow: the process-wide id sequence
/// and one order-placed hub per item variant.
pub struct OrderDesk {
    pub sequence: Arc<OrderSequence>,
    pub book_orders: OrderPlacedHub<PrintItem>,
    pub periodical_orders: OrderPlacedHub<Periodical>,
}

impl OrderDesk {
    /// Creates the desk with a fresh sequence and empty hubs.
    pub fn new() -> Self {
        Self {
            sequence: Arc::new(OrderSequence::new()),
            book_orders: OrderPlacedHub::new(),
            periodical_orders: OrderPlacedHub::new(),
        }
    }

    /// Creates an order against the desk's shared id sequence.
    pub fn new_order<T: CatalogItem>(
        &self,
        item: Arc<RwLock<T>>,
        quantity: u32,
        subscription_cadence: Option<Cadence>,
    ) -> Order<T> {
        Order::new(item, quantity, subscription_cadence, &self.sequence)
    }
}

impl Default for OrderDesk {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_of_mixed_variants_share_one_id_series() {
        let desk = OrderDesk::new();
        let book = Arc::new(RwLock::new(
            PrintItem::new("b", "Book", "P", 20.0).unwrap(),
        ));
        let magazine = Arc::new(RwLock::new(
            Periodical::new("m", "Mag", "P", 8.0, Cadence::Weekly).unwrap(),
        ));

        let first = desk.new_order(Arc::clone(&book), 1, None);
        let second = desk.new_order(Arc::clone(&magazine), 1, Some(Cadence::Weekly));
        let third = desk.new_order(book, 2, None);

        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert_eq!(third.id(), 3);
    }
}
