//! Hyperparameter tuning jobs.

use std::collections::BTreeMap;

use sagemodel_core::Record;
use serde::{Deserialize, Serialize};

use crate::{
  common::{
    Channel, CheckpointConfig, OutputDataConfig, ResourceConfig,
    StoppingCondition, Tag, VpcConfig,
  },
  enums::{
    HyperParameterScalingType, HyperParameterTuningJobObjectiveType,
    HyperParameterTuningJobStrategyType, TrainingInputMode,
    TrainingJobEarlyStoppingType,
  },
  training::MetricDefinition,
};

// ─── Search space ────────────────────────────────────────────────────────────

/// Metric the tuning job optimises.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct HyperParameterTuningJobObjective {
  #[serde(rename = "Type")]
  #[record(enumeration = HyperParameterTuningJobObjectiveType)]
  pub objective_type: Option<String>,
  /// Length 1 - 255.
  pub metric_name:    Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResourceLimits {
  /// Range 1 and up.
  pub max_number_of_training_jobs: Option<i32>,
  /// Range 1 and up.
  pub max_parallel_training_jobs:  Option<i32>,
}

/// Bounds are decimal strings on the wire.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct IntegerParameterRange {
  pub name:         Option<String>,
  pub min_value:    Option<String>,
  pub max_value:    Option<String>,
  #[record(enumeration = HyperParameterScalingType)]
  pub scaling_type: Option<String>,
}

/// Bounds are decimal strings on the wire.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContinuousParameterRange {
  pub name:         Option<String>,
  pub min_value:    Option<String>,
  pub max_value:    Option<String>,
  #[record(enumeration = HyperParameterScalingType)]
  pub scaling_type: Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct CategoricalParameterRange {
  pub name:   Option<String>,
  /// 1 - 20 entries.
  pub values: Option<Vec<String>>,
}

/// Ranges searched by a tuning job. At most 20 ranges in total.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct ParameterRanges {
  pub integer_parameter_ranges:     Option<Vec<IntegerParameterRange>>,
  pub continuous_parameter_ranges:  Option<Vec<ContinuousParameterRange>>,
  pub categorical_parameter_ranges: Option<Vec<CategoricalParameterRange>>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct HyperParameterTuningJobConfig {
  #[record(enumeration = HyperParameterTuningJobStrategyType)]
  pub strategy:                            Option<String>,
  pub hyper_parameter_tuning_job_objective: Option<HyperParameterTuningJobObjective>,
  pub resource_limits:                     Option<ResourceLimits>,
  pub parameter_ranges:                    Option<ParameterRanges>,
  #[record(enumeration = TrainingJobEarlyStoppingType)]
  pub training_job_early_stopping_type:    Option<String>,
}

// ─── Training job template ───────────────────────────────────────────────────

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct HyperParameterAlgorithmSpecification {
  pub training_image:      Option<String>,
  #[record(enumeration = TrainingInputMode)]
  pub training_input_mode: Option<String>,
  pub algorithm_name:      Option<String>,
  /// Max 40 entries.
  pub metric_definitions:  Option<Vec<MetricDefinition>>,
}

/// The training job every trial of a tuning job is launched from.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct HyperParameterTrainingJobDefinition {
  /// Length 1 - 64, pattern `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`.
  pub definition_name:                          Option<String>,
  pub tuning_objective:                         Option<HyperParameterTuningJobObjective>,
  pub hyper_parameter_ranges:                   Option<ParameterRanges>,
  /// Hyperparameters held fixed across trials. Max 100 entries.
  pub static_hyper_parameters:                  Option<BTreeMap<String, String>>,
  pub algorithm_specification:                  Option<HyperParameterAlgorithmSpecification>,
  /// Length 20 - 2048.
  pub role_arn:                                 Option<String>,
  /// 1 - 20 entries.
  pub input_data_config:                        Option<Vec<Channel>>,
  pub vpc_config:                               Option<VpcConfig>,
  pub output_data_config:                       Option<OutputDataConfig>,
  pub resource_config:                          Option<ResourceConfig>,
  pub stopping_condition:                       Option<StoppingCondition>,
  pub enable_network_isolation:                 Option<bool>,
  pub enable_inter_container_traffic_encryption: Option<bool>,
  pub enable_managed_spot_training:             Option<bool>,
  pub checkpoint_config:                        Option<CheckpointConfig>,
}

// ─── Operations ──────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateHyperParameterTuningJobRequest {
  /// Length 1 - 32, pattern `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`.
  pub hyper_parameter_tuning_job_name:   Option<String>,
  pub hyper_parameter_tuning_job_config: Option<HyperParameterTuningJobConfig>,
  pub training_job_definition:           Option<HyperParameterTrainingJobDefinition>,
  /// 1 - 10 entries.
  pub training_job_definitions:          Option<Vec<HyperParameterTrainingJobDefinition>>,
  /// 0 - 50 entries.
  pub tags:                              Option<Vec<Tag>>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateHyperParameterTuningJobResult {
  pub hyper_parameter_tuning_job_arn: Option<String>,
}
