//! Lifecycle states reported by the service.

use sagemodel_core::WireEnum;

/// Coarse state of a training job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum TrainingJobStatus {
  InProgress,
  Completed,
  Failed,
  Stopping,
  Stopped,
}

/// Detailed state of a training job. Valid transitions depend on the
/// primary [`TrainingJobStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum SecondaryStatus {
  Starting,
  LaunchingMLInstances,
  PreparingTrainingStack,
  Downloading,
  DownloadingTrainingImage,
  Training,
  Uploading,
  Stopping,
  Stopped,
  MaxRuntimeExceeded,
  Completed,
  Failed,
  Interrupted,
  MaxWaitTimeExceeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum NotebookInstanceStatus {
  Pending,
  InService,
  Stopping,
  Stopped,
  Failed,
  Deleting,
  Updating,
}

/// Outcome of a debugger rule evaluation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum RuleEvaluationStatus {
  InProgress,
  NoIssuesFound,
  IssuesFound,
  Error,
  Stopping,
  Stopped,
}
