//! Record to JSON body.

use sagemodel_core::{FloatCheck, Record};
use serde_json::Value;

use crate::error::{Error, Result};

/// Removes `null` members from every object in `value`, recursively.
pub(crate) fn strip_nulls(value: &mut Value) {
  match value {
    Value::Object(map) => {
      map.retain(|_, member| !member.is_null());
      map.values_mut().for_each(strip_nulls);
    }
    Value::Array(items) => items.iter_mut().for_each(strip_nulls),
    _ => {}
  }
}

/// JSON object holding only the set fields of `record`.
pub(crate) fn to_body<T: Record>(record: &T, pretty: bool) -> Result<String> {
  if let Some(path) = record.non_finite() {
    return Err(Error::NonFiniteFloat {
      field: path.trim_start_matches('.').to_owned(),
    });
  }
  let mut value = serde_json::to_value(record)?;
  strip_nulls(&mut value);
  let body = if pretty {
    serde_json::to_string_pretty(&value)?
  } else {
    serde_json::to_string(&value)?
  };
  Ok(body)
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn strips_nested_nulls_but_keeps_empty_containers() {
    let mut value = json!({
      "A": null,
      "B": { "C": null, "D": 1 },
      "E": [{ "F": null }],
      "G": [],
    });
    strip_nulls(&mut value);
    assert_eq!(value, json!({ "B": { "D": 1 }, "E": [{}], "G": [] }));
  }
}
