//! Batch transform jobs.

use std::collections::BTreeMap;

use sagemodel_core::Record;
use serde::{Deserialize, Serialize};

use crate::{
  common::{ExperimentConfig, Tag},
  enums::{
    AssemblyType, BatchStrategy, CompressionType, JoinSource, S3DataType,
    SplitType, TransformInstanceType,
  },
};

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformS3DataSource {
  #[record(enumeration = S3DataType)]
  pub s3_data_type: Option<String>,
  /// Max length 1024, pattern `^(https|s3)://([^/]+)/?(.*)$`.
  pub s3_uri:       Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformDataSource {
  pub s3_data_source: Option<TransformS3DataSource>,
}

/// Input of a transform job and how to split it into records.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformInput {
  pub data_source:      Option<TransformDataSource>,
  /// Max length 256.
  pub content_type:     Option<String>,
  #[record(enumeration = CompressionType)]
  pub compression_type: Option<String>,
  #[record(enumeration = SplitType)]
  pub split_type:       Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformOutput {
  /// Max length 1024, pattern `^(https|s3)://([^/]+)/?(.*)$`.
  pub s3_output_path: Option<String>,
  /// Max length 256.
  pub accept:         Option<String>,
  #[record(enumeration = AssemblyType)]
  pub assemble_with:  Option<String>,
  /// Max length 2048.
  pub kms_key_id:     Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformResources {
  #[record(enumeration = TransformInstanceType)]
  pub instance_type:     Option<String>,
  /// Range 1 and up.
  pub instance_count:    Option<i32>,
  /// Max length 2048.
  pub volume_kms_key_id: Option<String>,
}

/// JSONPath filters applied around inference, and whether to join the
/// input record into the output.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataProcessing {
  /// Max length 63.
  pub input_filter:  Option<String>,
  /// Max length 63.
  pub output_filter: Option<String>,
  #[record(enumeration = JoinSource)]
  pub join_source:   Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTransformJobRequest {
  /// Length 1 - 63, pattern `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`.
  pub transform_job_name:        Option<String>,
  /// Max length 63, pattern `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`.
  pub model_name:                Option<String>,
  /// Range 0 and up.
  pub max_concurrent_transforms: Option<i32>,
  /// Range 0 and up.
  #[serde(rename = "MaxPayloadInMB")]
  pub max_payload_in_mb:         Option<i32>,
  #[record(enumeration = BatchStrategy)]
  pub batch_strategy:            Option<String>,
  /// Max 16 entries; keys max length 1024, values max length 10240.
  pub environment:               Option<BTreeMap<String, String>>,
  pub transform_input:           Option<TransformInput>,
  pub transform_output:          Option<TransformOutput>,
  pub transform_resources:       Option<TransformResources>,
  pub data_processing:           Option<DataProcessing>,
  /// 0 - 50 entries.
  pub tags:                      Option<Vec<Tag>>,
  pub experiment_config:         Option<ExperimentConfig>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTransformJobResult {
  pub transform_job_arn: Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopTransformJobRequest {
  pub transform_job_name: Option<String>,
}
