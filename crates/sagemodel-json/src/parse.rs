//! JSON body to record.

use sagemodel_core::Record;
use serde_json::Value;

use crate::error::{Error, Result};

fn kind_of(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

/// Parses `body` into `T`. A blank body is an all-unset record; members the
/// model does not know are ignored.
pub(crate) fn from_body<T: Record>(body: &str) -> Result<T> {
  if body.trim().is_empty() {
    return Ok(T::default());
  }
  let value: Value = serde_json::from_str(body)?;
  if !value.is_object() {
    return Err(Error::UnexpectedBody(kind_of(&value)));
  }
  Ok(serde_json::from_value(value)?)
}
