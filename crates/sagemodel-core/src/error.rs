//! Error types for `sagemodel-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("{enumeration} value cannot be null or empty")]
  EmptyEnumValue { enumeration: &'static str },

  #[error("cannot create {enumeration} from unrecognized value {value:?}")]
  UnknownEnumValue {
    enumeration: &'static str,
    value:       String,
  },

  #[error("duplicated key ({key}) provided for {field}")]
  DuplicateMapKey { field: &'static str, key: String },

  #[error("unknown {kind}: {name:?}")]
  UnknownType { kind: &'static str, name: String },
}

impl Error {
  /// Whether the caller passed a bad argument, as opposed to naming
  /// something the model does not contain.
  pub fn is_invalid_argument(&self) -> bool {
    matches!(
      self,
      Self::EmptyEnumValue { .. }
        | Self::UnknownEnumValue { .. }
        | Self::DuplicateMapKey { .. }
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
