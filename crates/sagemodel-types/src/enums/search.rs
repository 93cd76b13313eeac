//! Sorting and filtering options for list and search operations.

use sagemodel_core::WireEnum;

/// Sort key for `ListTrainingJobs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum SortBy {
  Name,
  CreationTime,
  Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum SortOrder {
  Ascending,
  Descending,
}

/// Resource kinds the `Search` operation can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum ResourceType {
  TrainingJob,
  Experiment,
  ExperimentTrial,
  ExperimentTrialComponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum SearchSortOrder {
  Ascending,
  Descending,
}

/// How the parts of a search expression combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum BooleanOperator {
  And,
  Or,
}

/// Comparison applied by a search [`Filter`](crate::Filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum Operator {
  Equals,
  NotEquals,
  GreaterThan,
  GreaterThanOrEqualTo,
  LessThan,
  LessThanOrEqualTo,
  Contains,
  Exists,
  NotExists,
  In,
}
