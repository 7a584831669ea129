//! # Generic Order Entity
//!
//! This module defines [`Order<T>`], the request to purchase a quantity of
//! one catalog item.
//!
//! # Architecture Note
//! The order is written *once*, generic over the item variant it carries:
//! the same entity serves books and periodicals. The order does not own its
//! item: it holds an `Arc<RwLock<T>>`, so the item may be repriced by
//! others after the order was created. [`place`](Order::place) reads the
//! price *at call time*, which is why repeating the call after a price
//! change yields a different total.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

use crate::channel::{OrderPlaced, OrderPlacedHub};
use crate::model::{Cadence, CatalogItem};
use crate::order::{OrderError, OrderSequence};

/// Result of a placement: what was ordered and what it costs right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub isbn: String,
    pub quantity: u32,
    pub total_price: f64,
}

/// A request to purchase `quantity` copies of one catalog item.
///
/// The id is drawn from the [`OrderSequence`] at construction and never
/// changes afterwards. `quantity` is stored as given; zero is accepted and
/// simply yields a zero total. The optional subscription cadence
/// is independent of a held [`Periodical`](crate::model::Periodical)'s own
/// cadence and the two are never cross-checked.
#[derive(Debug)]
pub struct Order<T: CatalogItem> {
    id: u64,
    item: Arc<RwLock<T>>,
    created_at: DateTime<Utc>,
    pub quantity: u32,
    pub subscription_cadence: Option<Cadence>,
}

impl<T: CatalogItem> Order<T> {
    /// Creates a new order, drawing its id from `sequence`.
    pub fn new(
        item: Arc<RwLock<T>>,
        quantity: u32,
        subscription_cadence: Option<Cadence>,
        sequence: &OrderSequence,
    ) -> Self {
        let id = sequence.next_id();
        debug!(order_id = id, quantity, "Order created");
        Self {
            id,
            item,
            created_at: Utc::now(),
            quantity,
            subscription_cadence,
        }
    }

    /// The order's process-wide unique id. Immutable after construction.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// When the order was constructed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Shared handle to the held item.
    pub fn item(&self) -> &Arc<RwLock<T>> {
        &self.item
    }

    /// Places the order: computes the total from the item's *current*
    /// price, notifies every handler on `hub` before returning, and hands
    /// back the receipt. The order itself is unchanged; calling this again
    /// recomputes and re-notifies.
    ///
    /// # Errors
    /// Returns [`OrderError::ItemUnavailable`] if the held item's lock is
    /// poisoned.
    pub fn place(&self, hub: &OrderPlacedHub<T>) -> Result<OrderReceipt, OrderError> {
        let receipt = {
            let item = self
                .item
                .read()
                .map_err(|_| OrderError::ItemUnavailable(self.id))?;
            OrderReceipt {
                isbn: item.isbn().to_string(),
                quantity: self.quantity,
                total_price: item.price() * f64::from(self.quantity),
            }
        };

        hub.emit(&OrderPlaced { order_id: self.id });
        info!(
            order_id = self.id,
            isbn = %receipt.isbn,
            total = receipt.total_price,
            "Order placed"
        );
        Ok(receipt)
    }
}
