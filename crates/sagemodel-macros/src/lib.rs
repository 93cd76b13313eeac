//! Derive macros for the sagemodel data-model layer.
//!
//! - `Record` generates the accessors, `with_*` builders, the `Display`
//!   debug string and the `Record` descriptor for a struct whose fields are
//!   all `Option<T>`.
//! - `WireEnum` binds every unit variant of an enum to its wire-string and
//!   generates lookup, `Display`, `FromStr`, string conversions and serde
//!   impls that go through the wire-string.
//!
//! Generated code refers to `sagemodel-core` through whatever name the
//! expanding crate knows it by (see [`utils::core_crate`]).

mod attributes;
mod record;
mod utils;
mod wire_enum;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use crate::record::RecordComposition;

#[proc_macro_derive(Record, attributes(record))]
pub fn record_derive(item: TokenStream) -> TokenStream {
  let input = parse_macro_input!(item as DeriveInput);
  match RecordComposition::from_input(&input) {
    Ok(composition) => composition.into_token_stream(&input).into(),
    Err(err) => err.to_compile_error().into(),
  }
}

#[proc_macro_derive(WireEnum, attributes(wire))]
pub fn wire_enum_derive(item: TokenStream) -> TokenStream {
  let input = parse_macro_input!(item as DeriveInput);
  match wire_enum::expand(&input) {
    Ok(tokens) => tokens.into(),
    Err(err) => err.to_compile_error().into(),
  }
}
