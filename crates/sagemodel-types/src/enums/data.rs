//! How input data is located, framed and delivered to jobs.

use sagemodel_core::WireEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum TrainingInputMode {
  Pipe,
  File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum CompressionType {
  None,
  Gzip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum RecordWrapper {
  None,
  RecordIO,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum S3DataType {
  ManifestFile,
  S3Prefix,
  AugmentedManifestFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum S3DataDistribution {
  FullyReplicated,
  ShardedByS3Key,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum FileSystemAccessMode {
  #[wire = "rw"]
  Rw,
  #[wire = "ro"]
  Ro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum FileSystemType {
  #[wire = "EFS"]
  Efs,
  #[wire = "FSxLustre"]
  FSxLustre,
}

/// How a transform job splits an input file into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum SplitType {
  None,
  Line,
  RecordIO,
  #[wire = "TFRecord"]
  TfRecord,
}

/// How a transform job joins per-record results in its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum AssemblyType {
  None,
  Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum JoinSource {
  Input,
  None,
}

/// Records per mini-batch sent to a transform container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum BatchStrategy {
  MultiRecord,
  SingleRecord,
}
