//! Closed enumerations of the API, grouped by concern.

mod access;
mod data;
mod instance;
mod search;
mod status;
mod tuning;

pub use access::*;
pub use data::*;
pub use instance::*;
pub use search::*;
pub use status::*;
pub use tuning::*;
