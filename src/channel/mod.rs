//! # Order-Placed Notification Hub
//!
//! This module defines [`OrderPlacedHub<T>`], the broadcast point that fires
//! whenever an [`Order<T>`](crate::order::Order) is placed.
//!
//! # Architecture Note
//! Why one hub *per item variant*?
//! The hub is generic over the item type it serves, and the application
//! wiring instantiates it once per variant (see
//! [`OrderDesk`](crate::lifecycle::OrderDesk)). A placement of
//! `Order<Periodical>` can only reach an `OrderPlacedHub<Periodical>`, so a
//! handler subscribed for book orders is *unrepresentable* as a receiver of
//! periodical placements. The compiler enforces the isolation; no runtime
//! registry keyed by type tags is needed.
//!
//! **Dispatch model**: handlers run synchronously, in registration order, on
//! the caller's thread, before `place()` returns. There is no queue and no
//! task hop. Handlers must not subscribe or unsubscribe from inside a
//! callback; the handler list is locked for the duration of a dispatch.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Event fired when an order is placed. Carries the placing order's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub order_id: u64,
}

/// Token returned by [`OrderPlacedHub::subscribe`]; hand it back to
/// [`OrderPlacedHub::unsubscribe`] to remove exactly that handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn Fn(&OrderPlaced) + Send + Sync>;

/// Synchronous broadcast point for order placements of one item variant.
///
/// The `fn(&T)` phantom keeps the hub `Send + Sync` regardless of `T`
/// while still tying it to the variant it serves.
pub struct OrderPlacedHub<T: ?Sized> {
    handlers: Mutex<Vec<(SubscriptionId, Handler)>>,
    next_token: AtomicU64,
    _item: PhantomData<fn(&T)>,
}

impl<T: ?Sized> OrderPlacedHub<T> {
    /// Creates an empty hub. Emitting with no subscribers is not an error.
    pub fn new() -> Self {
        Self {
            handlers: Mutex::new(Vec::new()),
            next_token: AtomicU64::new(1),
            _item: PhantomData,
        }
    }

    /// Registers a handler and returns its subscription token.
    ///
    /// Handlers run in registration order on every subsequent
    /// [`emit`](Self::emit).
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&OrderPlaced) + Send + Sync + 'static,
    {
        let token = SubscriptionId(self.next_token.fetch_add(1, Ordering::SeqCst));
        self.lock_handlers().push((token, Box::new(handler)));
        debug!(token = token.0, "Handler subscribed");
        token
    }

    /// Removes the handler registered under `token`.
    ///
    /// Returns `false` if the token was already removed or never issued.
    pub fn unsubscribe(&self, token: SubscriptionId) -> bool {
        let mut handlers = self.lock_handlers();
        let before = handlers.len();
        handlers.retain(|(t, _)| *t != token);
        let removed = handlers.len() < before;
        debug!(token = token.0, removed, "Handler unsubscribed");
        removed
    }

    /// Number of currently registered handlers.
    pub fn handler_count(&self) -> usize {
        self.lock_handlers().len()
    }

    /// Invokes every registered handler with `event`, in registration
    /// order, on the caller's thread. Returns once the last handler has.
    pub fn emit(&self, event: &OrderPlaced) {
        let handlers = self.lock_handlers();
        debug!(
            order_id = event.order_id,
            handlers = handlers.len(),
            "Dispatching order-placed event"
        );
        for (_, handler) in handlers.iter() {
            handler(event);
        }
    }

    // A handler that panicked mid-dispatch poisons the mutex; the list
    // itself is still consistent, so later callers may keep using it.
    fn lock_handlers(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, Handler)>> {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: ?Sized> Default for OrderPlacedHub<T> {
    fn default() -> Self {
        Self::new()
    }
}
