//! Core traits and value types for the sagemodel data-model layer.
//!
//! Every record and enumeration in `sagemodel-types` is generated by the
//! `Record` and `WireEnum` derives re-exported here. This crate owns the
//! runtime half of that contract: the traits the derives implement, the
//! descriptors they emit, the debug-string formatter, and the few value
//! types (`Float`, epoch-second timestamps) that the wire shape needs.
//!
//! Nothing here performs I/O. Records are plain owned values: a record may
//! be moved to another thread, and shared immutably across threads, but
//! mutating setters take `&mut self` so concurrent mutation needs external
//! synchronisation. Enumeration lookup tables are built once on first use
//! and are read-only afterwards.

pub mod error;
pub mod float;
pub mod record;
pub mod render;
pub mod timestamp;
pub mod wire_enum;

pub use error::{Error, Result};
pub use float::{Float, FloatCheck};
pub use record::{EmptyResult, Record, Request};
pub use sagemodel_macros::{Record, WireEnum};
pub use wire_enum::WireEnum;

#[doc(hidden)]
pub mod __private {
  pub use serde;
}
