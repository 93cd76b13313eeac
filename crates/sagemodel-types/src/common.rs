//! Structures shared by several job kinds: data channels, output and
//! compute configuration, networking, stopping conditions and tags.

use sagemodel_core::Record;
use serde::{Deserialize, Serialize};

use crate::enums::{
  CompressionType, FileSystemAccessMode, FileSystemType, RecordWrapper,
  S3DataDistribution, S3DataType, TrainingInputMode, TrainingInstanceType,
};

// ─── Input channels ──────────────────────────────────────────────────────────

/// A named input to a training job.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct Channel {
  /// Length 1 - 64, pattern `[A-Za-z0-9\.\-_]+`.
  pub channel_name:        Option<String>,
  pub data_source:         Option<DataSource>,
  pub content_type:        Option<String>,
  #[record(enumeration = CompressionType)]
  pub compression_type:    Option<String>,
  #[record(enumeration = RecordWrapper)]
  pub record_wrapper_type: Option<String>,
  /// Overrides the algorithm's input mode for this channel.
  #[record(enumeration = TrainingInputMode)]
  pub input_mode:          Option<String>,
  pub shuffle_config:      Option<ShuffleConfig>,
}

/// Where a channel's data lives. Exactly one source is expected to be set.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataSource {
  pub s3_data_source:          Option<S3DataSource>,
  pub file_system_data_source: Option<FileSystemDataSource>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct S3DataSource {
  #[record(enumeration = S3DataType)]
  pub s3_data_type:              Option<String>,
  /// Max length 1024, pattern `^(https|s3)://([^/]+)/?(.*)$`.
  pub s3_uri:                    Option<String>,
  #[record(enumeration = S3DataDistribution)]
  pub s3_data_distribution_type: Option<String>,
  /// Attribute names to read from an augmented manifest, max 16 entries.
  pub attribute_names:           Option<Vec<String>>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct FileSystemDataSource {
  /// Min length 11, pattern `^(fs-[0-9a-f]{8,})$`.
  pub file_system_id:          Option<String>,
  #[record(enumeration = FileSystemAccessMode)]
  pub file_system_access_mode: Option<String>,
  #[record(enumeration = FileSystemType)]
  pub file_system_type:        Option<String>,
  /// Max length 4096, pattern `.*`.
  pub directory_path:          Option<String>,
}

/// Seeds the shuffling of S3 objects at the start of every epoch.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShuffleConfig {
  pub seed: Option<i64>,
}

// ─── Output and compute ──────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutputDataConfig {
  /// Max length 2048.
  pub kms_key_id:     Option<String>,
  /// Max length 1024, pattern `^(https|s3)://([^/]+)/?(.*)$`.
  pub s3_output_path: Option<String>,
}

/// Compute resources of a training job.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResourceConfig {
  #[record(enumeration = TrainingInstanceType)]
  pub instance_type:     Option<String>,
  /// Range 1 and up.
  pub instance_count:    Option<i32>,
  /// Range 1 and up.
  #[serde(rename = "VolumeSizeInGB")]
  pub volume_size_in_gb: Option<i32>,
  /// Max length 2048.
  pub volume_kms_key_id: Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcConfig {
  /// 1 - 5 entries, each max length 32, pattern `[-0-9a-zA-Z]+`.
  pub security_group_ids: Option<Vec<String>>,
  /// 1 - 16 entries, each max length 32, pattern `[-0-9a-zA-Z]+`.
  pub subnets:            Option<Vec<String>>,
}

/// Time limits for a job. Range 1 and up for both.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct StoppingCondition {
  pub max_runtime_in_seconds:   Option<i32>,
  pub max_wait_time_in_seconds: Option<i32>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct CheckpointConfig {
  pub s3_uri:     Option<String>,
  /// Max length 4096.
  pub local_path: Option<String>,
}

// ─── Metadata ────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
  /// Length 1 - 128.
  pub key:   Option<String>,
  /// Max length 256.
  pub value: Option<String>,
}

/// Associates a job with an experiment, trial and trial component.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExperimentConfig {
  pub experiment_name:              Option<String>,
  pub trial_name:                   Option<String>,
  pub trial_component_display_name: Option<String>,
}
