//! Order entity and its id sequence.
//!
//! - [`entity`] - the generic [`Order<T>`] and [`OrderReceipt`]
//! - [`sequence`] - the shared [`OrderSequence`] id source
//! - [`error`] - [`OrderError`] for placement failures

pub mod entity;
pub mod error;
pub mod sequence;

pub use entity::*;
pub use error::*;
pub use sequence::*;
