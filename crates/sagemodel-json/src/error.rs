//! Error types for the sagemodel-json codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error(transparent)]
  Model(#[from] sagemodel_core::Error),

  #[error("expected a JSON object body, found {0}")]
  UnexpectedBody(&'static str),

  /// JSON cannot carry NaN or an infinity.
  #[error("{field} holds a non-finite float")]
  NonFiniteFloat { field: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
