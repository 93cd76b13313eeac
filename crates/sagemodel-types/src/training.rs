//! Training jobs: the job description, its debugger and metric settings,
//! and the create / stop / list payloads.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sagemodel_core::{Float, Record};
use serde::{Deserialize, Serialize};

use crate::{
  common::{
    Channel, CheckpointConfig, ExperimentConfig, OutputDataConfig,
    ResourceConfig, StoppingCondition, Tag, VpcConfig,
  },
  enums::{
    ProcessingInstanceType, RuleEvaluationStatus, SecondaryStatus, SortBy,
    SortOrder, TrainingInputMode, TrainingJobStatus,
  },
};

// ─── Algorithm ───────────────────────────────────────────────────────────────

/// The training image or algorithm resource and how it consumes input.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct AlgorithmSpecification {
  /// Max length 255.
  pub training_image:                        Option<String>,
  /// Length 1 - 170.
  pub algorithm_name:                        Option<String>,
  #[record(enumeration = TrainingInputMode)]
  pub training_input_mode:                   Option<String>,
  /// Max 40 entries.
  pub metric_definitions:                    Option<Vec<MetricDefinition>>,
  pub enable_sage_maker_metrics_time_series: Option<bool>,
}

/// A metric parsed out of the algorithm's log output.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct MetricDefinition {
  /// Length 1 - 255.
  pub name:  Option<String>,
  /// Length 1 - 500.
  pub regex: Option<String>,
}

// ─── Debugger ────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct DebugHookConfig {
  pub local_path:                Option<String>,
  pub s3_output_path:            Option<String>,
  /// 0 - 20 entries.
  pub hook_parameters:           Option<BTreeMap<String, String>>,
  /// 0 - 20 entries.
  pub collection_configurations: Option<Vec<CollectionConfiguration>>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct CollectionConfiguration {
  pub collection_name:       Option<String>,
  pub collection_parameters: Option<BTreeMap<String, String>>,
}

/// A built-in or custom rule evaluated against debugger output.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct DebugRuleConfiguration {
  /// Length 1 - 256.
  pub rule_configuration_name: Option<String>,
  pub local_path:              Option<String>,
  pub s3_output_path:          Option<String>,
  pub rule_evaluator_image:    Option<String>,
  #[record(enumeration = ProcessingInstanceType)]
  pub instance_type:           Option<String>,
  #[serde(rename = "VolumeSizeInGB")]
  pub volume_size_in_gb:       Option<i32>,
  pub rule_parameters:         Option<BTreeMap<String, String>>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct TensorBoardOutputConfig {
  pub local_path:     Option<String>,
  pub s3_output_path: Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct DebugRuleEvaluationStatus {
  pub rule_configuration_name: Option<String>,
  pub rule_evaluation_job_arn: Option<String>,
  #[record(enumeration = RuleEvaluationStatus)]
  pub rule_evaluation_status:  Option<String>,
  /// Max length 1024.
  pub status_details:          Option<String>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub last_modified_time:      Option<DateTime<Utc>>,
}

// ─── Progress ────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModelArtifacts {
  /// S3 path of the model archive the job produced.
  pub s3_model_artifacts: Option<String>,
}

/// One entry in the history of a job's secondary status.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecondaryStatusTransition {
  #[record(enumeration = SecondaryStatus)]
  pub status:         Option<String>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub start_time:     Option<DateTime<Utc>>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub end_time:       Option<DateTime<Utc>>,
  pub status_message: Option<String>,
}

/// Final value of a metric emitted by the algorithm.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct MetricData {
  pub metric_name: Option<String>,
  pub value:       Option<Float>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub timestamp:   Option<DateTime<Utc>>,
}

// ─── Training job ────────────────────────────────────────────────────────────

/// Full description of a training job, as returned by `Search`.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct TrainingJob {
  /// Length 1 - 63, pattern `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`.
  pub training_job_name:                        Option<String>,
  /// Max length 256.
  pub training_job_arn:                         Option<String>,
  pub tuning_job_arn:                           Option<String>,
  pub labeling_job_arn:                         Option<String>,
  #[serde(rename = "AutoMLJobArn")]
  pub auto_ml_job_arn:                          Option<String>,
  pub model_artifacts:                          Option<ModelArtifacts>,
  #[record(enumeration = TrainingJobStatus)]
  pub training_job_status:                      Option<String>,
  #[record(enumeration = SecondaryStatus)]
  pub secondary_status:                         Option<String>,
  /// Max length 1024.
  pub failure_reason:                           Option<String>,
  /// Max 100 entries; keys max length 256, values max length 2500.
  pub hyper_parameters:                         Option<BTreeMap<String, String>>,
  pub algorithm_specification:                  Option<AlgorithmSpecification>,
  /// Length 20 - 2048.
  pub role_arn:                                 Option<String>,
  /// 1 - 20 entries.
  pub input_data_config:                        Option<Vec<Channel>>,
  pub output_data_config:                       Option<OutputDataConfig>,
  pub resource_config:                          Option<ResourceConfig>,
  pub vpc_config:                               Option<VpcConfig>,
  pub stopping_condition:                       Option<StoppingCondition>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub creation_time:                            Option<DateTime<Utc>>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub training_start_time:                      Option<DateTime<Utc>>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub training_end_time:                        Option<DateTime<Utc>>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub last_modified_time:                       Option<DateTime<Utc>>,
  pub secondary_status_transitions:             Option<Vec<SecondaryStatusTransition>>,
  /// Max 40 entries.
  pub final_metric_data_list:                   Option<Vec<MetricData>>,
  pub enable_network_isolation:                 Option<bool>,
  pub enable_inter_container_traffic_encryption: Option<bool>,
  pub enable_managed_spot_training:             Option<bool>,
  pub checkpoint_config:                        Option<CheckpointConfig>,
  /// Range 1 and up.
  pub training_time_in_seconds:                 Option<i32>,
  /// Range 1 and up.
  pub billable_time_in_seconds:                 Option<i32>,
  pub debug_hook_config:                        Option<DebugHookConfig>,
  pub experiment_config:                        Option<ExperimentConfig>,
  /// 0 - 20 entries.
  pub debug_rule_configurations:                Option<Vec<DebugRuleConfiguration>>,
  pub tensor_board_output_config:               Option<TensorBoardOutputConfig>,
  /// 0 - 20 entries.
  pub debug_rule_evaluation_statuses:           Option<Vec<DebugRuleEvaluationStatus>>,
  /// 0 - 50 entries.
  pub tags:                                     Option<Vec<Tag>>,
}

/// Summary row returned by `ListTrainingJobs`.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct TrainingJobSummary {
  pub training_job_name:   Option<String>,
  pub training_job_arn:    Option<String>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub creation_time:       Option<DateTime<Utc>>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub training_end_time:   Option<DateTime<Utc>>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub last_modified_time:  Option<DateTime<Utc>>,
  #[record(enumeration = TrainingJobStatus)]
  pub training_job_status: Option<String>,
}

// ─── Operations ──────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTrainingJobRequest {
  /// Length 1 - 63, pattern `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`. Unique per
  /// account and region.
  pub training_job_name:                        Option<String>,
  /// Max 100 entries; keys max length 256, values max length 2500.
  pub hyper_parameters:                         Option<BTreeMap<String, String>>,
  pub algorithm_specification:                  Option<AlgorithmSpecification>,
  /// Length 20 - 2048.
  pub role_arn:                                 Option<String>,
  /// 1 - 20 entries.
  pub input_data_config:                        Option<Vec<Channel>>,
  pub output_data_config:                       Option<OutputDataConfig>,
  pub resource_config:                          Option<ResourceConfig>,
  pub vpc_config:                               Option<VpcConfig>,
  pub stopping_condition:                       Option<StoppingCondition>,
  /// 0 - 50 entries.
  pub tags:                                     Option<Vec<Tag>>,
  pub enable_network_isolation:                 Option<bool>,
  pub enable_inter_container_traffic_encryption: Option<bool>,
  pub enable_managed_spot_training:             Option<bool>,
  pub checkpoint_config:                        Option<CheckpointConfig>,
  pub debug_hook_config:                        Option<DebugHookConfig>,
  /// 0 - 20 entries.
  pub debug_rule_configurations:                Option<Vec<DebugRuleConfiguration>>,
  pub tensor_board_output_config:               Option<TensorBoardOutputConfig>,
  pub experiment_config:                        Option<ExperimentConfig>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTrainingJobResult {
  pub training_job_arn: Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopTrainingJobRequest {
  pub training_job_name: Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTrainingJobsRequest {
  /// Max length 8192.
  pub next_token:               Option<String>,
  /// Range 1 - 100.
  pub max_results:              Option<i32>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub creation_time_after:      Option<DateTime<Utc>>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub creation_time_before:     Option<DateTime<Utc>>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub last_modified_time_after: Option<DateTime<Utc>>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub last_modified_time_before: Option<DateTime<Utc>>,
  /// Max length 63, pattern `[a-zA-Z0-9\-]+`.
  pub name_contains:            Option<String>,
  #[record(enumeration = TrainingJobStatus)]
  pub status_equals:            Option<String>,
  #[record(enumeration = SortBy)]
  pub sort_by:                  Option<String>,
  #[record(enumeration = SortOrder)]
  pub sort_order:               Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTrainingJobsResult {
  pub training_job_summaries: Option<Vec<TrainingJobSummary>>,
  pub next_token:             Option<String>,
}
