//! Catalog item hierarchy: the data structures that can be ordered.
//!
//! - [`item`] - the [`CatalogItem`] contract shared by all variants
//! - [`print_item`] - the base book variant with the validated price
//! - [`periodical`] - the cadenced variant composing a [`PrintItem`]
//! - [`cadence`] - publication frequency enum
//! - [`error`] - [`CatalogError`] and the price bounds

pub mod cadence;
pub mod error;
pub mod item;
pub mod periodical;
pub mod print_item;

pub use cadence::*;
pub use error::*;
pub use item::*;
pub use periodical::*;
pub use print_item::*;
