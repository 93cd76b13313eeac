//! Records and enumerations of the SageMaker control-plane API.
//!
//! Records are grouped by the job kind they describe; everything is also
//! re-exported at the crate root. Each record is a struct of `Option` fields
//! with the accessors, `with_*` builders, debug string and descriptor
//! generated by [`sagemodel_core::Record`]. Enumeration-typed fields hold the
//! wire-string, so values the model does not know yet still round-trip; the
//! matching enumeration is named in the field's descriptor.
//!
//! ```
//! use sagemodel_types::{CreateNotebookInstanceRequest, InstanceType};
//!
//! let request = CreateNotebookInstanceRequest::default()
//!   .with_notebook_instance_name("nb")
//!   .with_instance_type(InstanceType::MlT2Medium);
//! assert_eq!(
//!   request.to_string(),
//!   "{NotebookInstanceName: nb,InstanceType: ml.t2.medium}"
//! );
//! ```

pub mod catalog;
pub mod common;
pub mod enums;
pub mod human;
pub mod notebook;
pub mod operation;
pub mod search;
pub mod training;
pub mod transform;
pub mod tuning;

pub use common::*;
pub use enums::*;
pub use human::*;
pub use notebook::*;
pub use operation::{Operation, OperationVisitor};
pub use sagemodel_core::EmptyResult;
pub use search::*;
pub use training::*;
pub use transform::*;
pub use tuning::*;

#[cfg(test)]
mod tests;
