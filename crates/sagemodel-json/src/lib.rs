//! JSON wire codec for sagemodel records.
//!
//! Builds AWS-JSON-1.1 style request envelopes (target header plus body) from
//! request records and parses response bodies back into result records.
//! Pure synchronous; performs no network I/O.
//!
//! # Quick start
//!
//! ```
//! use sagemodel_json::{CodecConfig, marshal};
//! use sagemodel_types::StopNotebookInstanceRequest;
//!
//! let request =
//!   StopNotebookInstanceRequest::default().with_notebook_instance_name("nb");
//! let envelope = marshal(&request, &CodecConfig::default()).unwrap();
//! assert_eq!(envelope.target, "SageMaker.StopNotebookInstance");
//! assert_eq!(envelope.body, r#"{"NotebookInstanceName":"nb"}"#);
//! ```

mod config;
pub mod error;
mod parse;
mod serialize;

use std::fmt;

pub use config::CodecConfig;
pub use error::{Error, Result};
use sagemodel_core::{Record, Request, record::RecordDescriptor};
use sagemodel_types::{Operation, OperationVisitor};

// ─── Public types ────────────────────────────────────────────────────────────

/// A request ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
  /// Value of the `X-Amz-Target` header, e.g. `SageMaker.CreateTrainingJob`.
  pub target:       String,
  pub content_type: String,
  pub body:         String,
}

/// Which side of an operation a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Request,
  Response,
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Request => "request",
      Self::Response => "response",
    })
  }
}

// ─── Typed API ───────────────────────────────────────────────────────────────

/// Serializes `record` as a compact JSON object of its set fields.
pub fn encode<T: Record>(record: &T) -> Result<String> {
  serialize::to_body(record, false)
}

/// Parses a JSON object into `T`. A blank body yields `T::default()`.
pub fn decode<T: Record>(body: &str) -> Result<T> {
  parse::from_body(body)
}

/// Builds the envelope for `request`.
pub fn marshal<R: Request>(request: &R, config: &CodecConfig) -> Result<Envelope> {
  let target = format!("{}.{}", config.target_prefix, R::OPERATION);
  let body = serialize::to_body(request, config.pretty)?;
  tracing::debug!(%target, bytes = body.len(), "marshalled request");
  tracing::trace!(%body);
  Ok(Envelope {
    target,
    content_type: config.content_type.clone(),
    body,
  })
}

/// Parses the response body of `R`'s operation.
pub fn unmarshal<R: Request>(body: &str) -> Result<R::Response> {
  tracing::debug!(
    operation = R::OPERATION,
    bytes = body.len(),
    "unmarshalling response"
  );
  tracing::trace!(%body);
  parse::from_body(body)
}

// ─── Operation-keyed API ─────────────────────────────────────────────────────

/// Descriptor of the record bound to one side of `operation`.
pub fn descriptor(operation: Operation, direction: Direction) -> RecordDescriptor {
  match direction {
    Direction::Request => operation.request_descriptor(),
    Direction::Response => operation.response_descriptor(),
  }
}

struct Render<'a> {
  direction: Direction,
  body:      &'a str,
}

impl OperationVisitor for Render<'_> {
  type Output = Result<String>;

  fn visit<R: Request>(self) -> Self::Output {
    match self.direction {
      Direction::Request => Ok(decode::<R>(self.body)?.to_string()),
      Direction::Response => Ok(unmarshal::<R>(self.body)?.to_string()),
    }
  }
}

/// Decodes a payload of `operation` and returns its debug string.
pub fn render(
  operation: Operation,
  direction: Direction,
  body: &str,
) -> Result<String> {
  operation.accept(Render { direction, body })
}

struct Remarshal<'a> {
  body:   &'a str,
  config: &'a CodecConfig,
}

impl OperationVisitor for Remarshal<'_> {
  type Output = Result<Envelope>;

  fn visit<R: Request>(self) -> Self::Output {
    let request: R = decode(self.body)?;
    marshal(&request, self.config)
  }
}

/// Decodes a JSON request for `operation` and builds its envelope. Members
/// the request record does not know are dropped.
pub fn marshal_json(
  operation: Operation,
  body: &str,
  config: &CodecConfig,
) -> Result<Envelope> {
  operation.accept(Remarshal { body, config })
}
