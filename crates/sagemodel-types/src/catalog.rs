//! Descriptors of every record and enumeration in the model, searchable by
//! type name.

use sagemodel_core::{
  EmptyResult, Error, Record, Result, WireEnum, record::RecordDescriptor,
  wire_enum::EnumDescriptor,
};

use crate::{
  common::*, enums::*, human::*, notebook::*, operation::Operation, search::*,
  training::*, transform::*, tuning::*,
};

pub static RECORDS: &[RecordDescriptor] = &[
  // common
  Channel::DESCRIPTOR,
  DataSource::DESCRIPTOR,
  S3DataSource::DESCRIPTOR,
  FileSystemDataSource::DESCRIPTOR,
  ShuffleConfig::DESCRIPTOR,
  OutputDataConfig::DESCRIPTOR,
  ResourceConfig::DESCRIPTOR,
  VpcConfig::DESCRIPTOR,
  StoppingCondition::DESCRIPTOR,
  CheckpointConfig::DESCRIPTOR,
  Tag::DESCRIPTOR,
  ExperimentConfig::DESCRIPTOR,
  EmptyResult::DESCRIPTOR,
  // training
  AlgorithmSpecification::DESCRIPTOR,
  MetricDefinition::DESCRIPTOR,
  DebugHookConfig::DESCRIPTOR,
  CollectionConfiguration::DESCRIPTOR,
  DebugRuleConfiguration::DESCRIPTOR,
  TensorBoardOutputConfig::DESCRIPTOR,
  DebugRuleEvaluationStatus::DESCRIPTOR,
  ModelArtifacts::DESCRIPTOR,
  SecondaryStatusTransition::DESCRIPTOR,
  MetricData::DESCRIPTOR,
  TrainingJob::DESCRIPTOR,
  TrainingJobSummary::DESCRIPTOR,
  CreateTrainingJobRequest::DESCRIPTOR,
  CreateTrainingJobResult::DESCRIPTOR,
  StopTrainingJobRequest::DESCRIPTOR,
  ListTrainingJobsRequest::DESCRIPTOR,
  ListTrainingJobsResult::DESCRIPTOR,
  // search
  Filter::DESCRIPTOR,
  NestedFilters::DESCRIPTOR,
  SearchExpression::DESCRIPTOR,
  SearchRecord::DESCRIPTOR,
  SearchRequest::DESCRIPTOR,
  SearchResult::DESCRIPTOR,
  // tuning
  HyperParameterTuningJobObjective::DESCRIPTOR,
  ResourceLimits::DESCRIPTOR,
  IntegerParameterRange::DESCRIPTOR,
  ContinuousParameterRange::DESCRIPTOR,
  CategoricalParameterRange::DESCRIPTOR,
  ParameterRanges::DESCRIPTOR,
  HyperParameterTuningJobConfig::DESCRIPTOR,
  HyperParameterAlgorithmSpecification::DESCRIPTOR,
  HyperParameterTrainingJobDefinition::DESCRIPTOR,
  CreateHyperParameterTuningJobRequest::DESCRIPTOR,
  CreateHyperParameterTuningJobResult::DESCRIPTOR,
  // transform
  TransformS3DataSource::DESCRIPTOR,
  TransformDataSource::DESCRIPTOR,
  TransformInput::DESCRIPTOR,
  TransformOutput::DESCRIPTOR,
  TransformResources::DESCRIPTOR,
  DataProcessing::DESCRIPTOR,
  CreateTransformJobRequest::DESCRIPTOR,
  CreateTransformJobResult::DESCRIPTOR,
  StopTransformJobRequest::DESCRIPTOR,
  // notebook
  CreateNotebookInstanceRequest::DESCRIPTOR,
  CreateNotebookInstanceResult::DESCRIPTOR,
  DescribeNotebookInstanceRequest::DESCRIPTOR,
  DescribeNotebookInstanceResult::DESCRIPTOR,
  UpdateNotebookInstanceRequest::DESCRIPTOR,
  StartNotebookInstanceRequest::DESCRIPTOR,
  StopNotebookInstanceRequest::DESCRIPTOR,
  DeleteNotebookInstanceRequest::DESCRIPTOR,
  // human
  Usd::DESCRIPTOR,
  PublicWorkforceTaskPrice::DESCRIPTOR,
  UiConfig::DESCRIPTOR,
  AnnotationConsolidationConfig::DESCRIPTOR,
  HumanLoopConfig::DESCRIPTOR,
  HumanTaskConfig::DESCRIPTOR,
];

pub static ENUMERATIONS: &[EnumDescriptor] = &[
  TrainingJobStatus::DESCRIPTOR,
  SecondaryStatus::DESCRIPTOR,
  NotebookInstanceStatus::DESCRIPTOR,
  RuleEvaluationStatus::DESCRIPTOR,
  InstanceType::DESCRIPTOR,
  NotebookInstanceAcceleratorType::DESCRIPTOR,
  TrainingInstanceType::DESCRIPTOR,
  TransformInstanceType::DESCRIPTOR,
  ProcessingInstanceType::DESCRIPTOR,
  DirectInternetAccess::DESCRIPTOR,
  RootAccess::DESCRIPTOR,
  TrainingInputMode::DESCRIPTOR,
  CompressionType::DESCRIPTOR,
  RecordWrapper::DESCRIPTOR,
  S3DataType::DESCRIPTOR,
  S3DataDistribution::DESCRIPTOR,
  FileSystemAccessMode::DESCRIPTOR,
  FileSystemType::DESCRIPTOR,
  SplitType::DESCRIPTOR,
  AssemblyType::DESCRIPTOR,
  JoinSource::DESCRIPTOR,
  BatchStrategy::DESCRIPTOR,
  HyperParameterTuningJobObjectiveType::DESCRIPTOR,
  HyperParameterScalingType::DESCRIPTOR,
  HyperParameterTuningJobStrategyType::DESCRIPTOR,
  TrainingJobEarlyStoppingType::DESCRIPTOR,
  SortBy::DESCRIPTOR,
  SortOrder::DESCRIPTOR,
  ResourceType::DESCRIPTOR,
  SearchSortOrder::DESCRIPTOR,
  BooleanOperator::DESCRIPTOR,
  Operator::DESCRIPTOR,
  Operation::DESCRIPTOR,
];

/// Finds a record descriptor by type name, e.g. `"TrainingJob"`.
pub fn record(name: &str) -> Result<&'static RecordDescriptor> {
  RECORDS
    .iter()
    .find(|descriptor| descriptor.name == name)
    .ok_or_else(|| Error::UnknownType {
      kind: "record",
      name: name.to_owned(),
    })
}

/// Finds an enumeration descriptor by type name, e.g. `"InstanceType"`.
pub fn enumeration(name: &str) -> Result<&'static EnumDescriptor> {
  ENUMERATIONS
    .iter()
    .find(|descriptor| descriptor.name == name)
    .ok_or_else(|| Error::UnknownType {
      kind: "enumeration",
      name: name.to_owned(),
    })
}

/// Resolves `value` against the named enumeration, returning its canonical
/// wire-string.
pub fn lookup(enumeration_name: &str, value: &str) -> Result<&'static str> {
  enumeration(enumeration_name)?.resolve(Some(value))
}
