use serde::{Deserialize, Serialize};

/// Settings for building request envelopes.
///
/// Every field has a default, so an empty configuration source is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
  /// Prepended to the operation name in the target header.
  pub target_prefix: String,
  pub content_type:  String,
  /// Pretty-print bodies instead of emitting compact JSON.
  pub pretty:        bool,
}

impl Default for CodecConfig {
  fn default() -> Self {
    Self {
      target_prefix: "SageMaker".to_owned(),
      content_type:  "application/x-amz-json-1.1".to_owned(),
      pretty:        false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_fields_take_defaults() {
    let config: CodecConfig =
      serde_json::from_str(r#"{ "pretty": true }"#).unwrap();
    assert_eq!(config.target_prefix, "SageMaker");
    assert_eq!(config.content_type, "application/x-amz-json-1.1");
    assert!(config.pretty);
  }
}
