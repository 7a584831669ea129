//! Error types for the order entity.

use thiserror::Error;

/// Errors that can occur while placing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The held item could not be read because a writer panicked while
    /// holding its lock. This is the shared-ownership analogue of a
    /// missing/invalid item argument: the order exists but the item it
    /// points at is no longer usable.
    #[error("Item for order {0} is unavailable")]
    ItemUnavailable(u64),
}
