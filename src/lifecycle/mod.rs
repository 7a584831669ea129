//! # System Lifecycle & Wiring
//!
//! Individual domain pieces are simple; **wiring them together** is where
//! the shared-state decisions live. This module provides that wiring plus
//! observability setup.
//!
//! **Key responsibilities:**
//! 1. **Shared id sequence** - one [`OrderSequence`](crate::order::OrderSequence)
//!    for every order in the process, whatever item variant it holds
//! 2. **Per-variant hubs** - one
//!    [`OrderPlacedHub`](crate::channel::OrderPlacedHub) per item variant,
//!    so handlers only ever see placements of "their" variant
//! 3. **Observability setup** - [`setup_tracing`] installs the subscriber
//!
//! See [`OrderDesk`] for the wiring struct the driver uses.

pub mod order_desk;
pub mod tracing;

pub use self::order_desk::*;
pub use self::tracing::*;
