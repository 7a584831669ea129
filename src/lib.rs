//! # Bookshop
//!
//! > **A catalog/ordering domain model for printed items.**
//!
//! This crate models a minimal bookshop workflow: a catalog of priced items
//! (books and periodicals), a generic order entity, and a synchronous
//! order-placed notification hub. It is a domain model, not an
//! infrastructure component: no persistence, no network, no background
//! tasks.
//!
//! ## Core Concepts
//!
//! ### Generics: The Power of `T`
//! You'll see `Order<T: CatalogItem>` and `OrderPlacedHub<T>` everywhere.
//! This means "I can carry / announce *any* catalog item, as long as it
//! behaves like a `CatalogItem`."
//! - **Benefit**: The order and the hub are written **once** and work for
//!   books and periodicals alike.
//! - **Bonus**: The hub's type parameter makes cross-variant delivery
//!   unrepresentable: a book-order handler cannot receive a
//!   periodical-order placement, by construction.
//!
//! ### The Price Invariant
//! Every catalog item's price lies in the inclusive range €5–€50, enforced
//! at construction and on every later update. A rejected value never
//! becomes observable; a rejected update leaves the old price in place.
//!
//! ### One Id Series for Everything
//! All orders draw from a single [`OrderSequence`](order::OrderSequence),
//! regardless of the item variant they hold. Ids start at 1, increase
//! strictly, and are never reused.
//!
//! ## Module Tour
//!
//! ### 1. The Catalog ([`model`])
//! [`PrintItem`](model::PrintItem), [`Periodical`](model::Periodical) and
//! the [`CatalogItem`](model::CatalogItem) contract they share.
//!
//! ### 2. The Orders ([`order`])
//! The generic [`Order<T>`](order::Order), its id
//! [`sequence`](order::sequence), and the
//! [`OrderReceipt`](order::OrderReceipt) a placement returns.
//!
//! ### 3. The Announcements ([`channel`])
//! [`OrderPlacedHub<T>`](channel::OrderPlacedHub): synchronous,
//! registration-ordered dispatch on the caller's thread.
//!
//! ### 4. The Wiring ([`lifecycle`])
//! [`OrderDesk`](lifecycle::OrderDesk) owns the shared sequence and the
//! per-variant hubs; [`setup_tracing`](lifecycle::setup_tracing) installs
//! the log subscriber for the binary.
//!
//! ## Quick Start
//!
//! ```rust
//! use bookshop::lifecycle::OrderDesk;
//! use bookshop::model::PrintItem;
//! use std::sync::{Arc, RwLock};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let desk = OrderDesk::new();
//! desk.book_orders.subscribe(|event| {
//!     println!("Order {} was placed!", event.order_id);
//! });
//!
//! let book = Arc::new(RwLock::new(PrintItem::new(
//!     "978-3-16-148410-0",
//!     "De naam van de roos",
//!     "Uitgeverij X",
//!     20.0,
//! )?));
//!
//! let order = desk.new_order(book, 3, None);
//! let receipt = order.place(&desk.book_orders)?;
//! assert_eq!(receipt.total_price, 60.0);
//! # Ok(())
//! # }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod channel;
pub mod lifecycle;
pub mod model;
pub mod order;
