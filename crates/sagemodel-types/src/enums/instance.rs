//! ML compute instance types.
//!
//! Each job kind accepts its own subset of instance types, so each gets its
//! own enumeration. Variant names follow the wire-string with the dots
//! dropped: `ml.m5.xlarge` is `MlM5Xlarge`.

use sagemodel_core::WireEnum;

/// Instance types a notebook instance can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum InstanceType {
  #[wire = "ml.t2.medium"]
  MlT2Medium,
  #[wire = "ml.t2.large"]
  MlT2Large,
  #[wire = "ml.t2.xlarge"]
  MlT2Xlarge,
  #[wire = "ml.t2.2xlarge"]
  MlT22xlarge,
  #[wire = "ml.t3.medium"]
  MlT3Medium,
  #[wire = "ml.t3.large"]
  MlT3Large,
  #[wire = "ml.t3.xlarge"]
  MlT3Xlarge,
  #[wire = "ml.t3.2xlarge"]
  MlT32xlarge,
  #[wire = "ml.m4.xlarge"]
  MlM4Xlarge,
  #[wire = "ml.m4.2xlarge"]
  MlM42xlarge,
  #[wire = "ml.m4.4xlarge"]
  MlM44xlarge,
  #[wire = "ml.m4.10xlarge"]
  MlM410xlarge,
  #[wire = "ml.m4.16xlarge"]
  MlM416xlarge,
  #[wire = "ml.m5.xlarge"]
  MlM5Xlarge,
  #[wire = "ml.m5.2xlarge"]
  MlM52xlarge,
  #[wire = "ml.m5.4xlarge"]
  MlM54xlarge,
  #[wire = "ml.m5.12xlarge"]
  MlM512xlarge,
  #[wire = "ml.m5.24xlarge"]
  MlM524xlarge,
  #[wire = "ml.c4.xlarge"]
  MlC4Xlarge,
  #[wire = "ml.c4.2xlarge"]
  MlC42xlarge,
  #[wire = "ml.c4.4xlarge"]
  MlC44xlarge,
  #[wire = "ml.c4.8xlarge"]
  MlC48xlarge,
  #[wire = "ml.c5.xlarge"]
  MlC5Xlarge,
  #[wire = "ml.c5.2xlarge"]
  MlC52xlarge,
  #[wire = "ml.c5.4xlarge"]
  MlC54xlarge,
  #[wire = "ml.c5.9xlarge"]
  MlC59xlarge,
  #[wire = "ml.c5.18xlarge"]
  MlC518xlarge,
  #[wire = "ml.c5d.xlarge"]
  MlC5dXlarge,
  #[wire = "ml.c5d.2xlarge"]
  MlC5d2xlarge,
  #[wire = "ml.c5d.4xlarge"]
  MlC5d4xlarge,
  #[wire = "ml.c5d.9xlarge"]
  MlC5d9xlarge,
  #[wire = "ml.c5d.18xlarge"]
  MlC5d18xlarge,
  #[wire = "ml.p2.xlarge"]
  MlP2Xlarge,
  #[wire = "ml.p2.8xlarge"]
  MlP28xlarge,
  #[wire = "ml.p2.16xlarge"]
  MlP216xlarge,
  #[wire = "ml.p3.2xlarge"]
  MlP32xlarge,
  #[wire = "ml.p3.8xlarge"]
  MlP38xlarge,
  #[wire = "ml.p3.16xlarge"]
  MlP316xlarge,
}

/// Elastic Inference accelerators attachable to a notebook instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum NotebookInstanceAcceleratorType {
  #[wire = "ml.eia1.medium"]
  MlEia1Medium,
  #[wire = "ml.eia1.large"]
  MlEia1Large,
  #[wire = "ml.eia1.xlarge"]
  MlEia1Xlarge,
  #[wire = "ml.eia2.medium"]
  MlEia2Medium,
  #[wire = "ml.eia2.large"]
  MlEia2Large,
  #[wire = "ml.eia2.xlarge"]
  MlEia2Xlarge,
}

/// Instance types for training jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum TrainingInstanceType {
  #[wire = "ml.m4.xlarge"]
  MlM4Xlarge,
  #[wire = "ml.m4.2xlarge"]
  MlM42xlarge,
  #[wire = "ml.m4.4xlarge"]
  MlM44xlarge,
  #[wire = "ml.m4.10xlarge"]
  MlM410xlarge,
  #[wire = "ml.m4.16xlarge"]
  MlM416xlarge,
  #[wire = "ml.g4dn.xlarge"]
  MlG4dnXlarge,
  #[wire = "ml.g4dn.2xlarge"]
  MlG4dn2xlarge,
  #[wire = "ml.g4dn.4xlarge"]
  MlG4dn4xlarge,
  #[wire = "ml.g4dn.8xlarge"]
  MlG4dn8xlarge,
  #[wire = "ml.g4dn.12xlarge"]
  MlG4dn12xlarge,
  #[wire = "ml.g4dn.16xlarge"]
  MlG4dn16xlarge,
  #[wire = "ml.m5.large"]
  MlM5Large,
  #[wire = "ml.m5.xlarge"]
  MlM5Xlarge,
  #[wire = "ml.m5.2xlarge"]
  MlM52xlarge,
  #[wire = "ml.m5.4xlarge"]
  MlM54xlarge,
  #[wire = "ml.m5.12xlarge"]
  MlM512xlarge,
  #[wire = "ml.m5.24xlarge"]
  MlM524xlarge,
  #[wire = "ml.c4.xlarge"]
  MlC4Xlarge,
  #[wire = "ml.c4.2xlarge"]
  MlC42xlarge,
  #[wire = "ml.c4.4xlarge"]
  MlC44xlarge,
  #[wire = "ml.c4.8xlarge"]
  MlC48xlarge,
  #[wire = "ml.p2.xlarge"]
  MlP2Xlarge,
  #[wire = "ml.p2.8xlarge"]
  MlP28xlarge,
  #[wire = "ml.p2.16xlarge"]
  MlP216xlarge,
  #[wire = "ml.p3.2xlarge"]
  MlP32xlarge,
  #[wire = "ml.p3.8xlarge"]
  MlP38xlarge,
  #[wire = "ml.p3.16xlarge"]
  MlP316xlarge,
  #[wire = "ml.p3dn.24xlarge"]
  MlP3dn24xlarge,
  #[wire = "ml.c5.xlarge"]
  MlC5Xlarge,
  #[wire = "ml.c5.2xlarge"]
  MlC52xlarge,
  #[wire = "ml.c5.4xlarge"]
  MlC54xlarge,
  #[wire = "ml.c5.9xlarge"]
  MlC59xlarge,
  #[wire = "ml.c5.18xlarge"]
  MlC518xlarge,
  #[wire = "ml.c5n.xlarge"]
  MlC5nXlarge,
  #[wire = "ml.c5n.2xlarge"]
  MlC5n2xlarge,
  #[wire = "ml.c5n.4xlarge"]
  MlC5n4xlarge,
  #[wire = "ml.c5n.9xlarge"]
  MlC5n9xlarge,
  #[wire = "ml.c5n.18xlarge"]
  MlC5n18xlarge,
}

/// Instance types for batch transform jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum TransformInstanceType {
  #[wire = "ml.m4.xlarge"]
  MlM4Xlarge,
  #[wire = "ml.m4.2xlarge"]
  MlM42xlarge,
  #[wire = "ml.m4.4xlarge"]
  MlM44xlarge,
  #[wire = "ml.m4.10xlarge"]
  MlM410xlarge,
  #[wire = "ml.m4.16xlarge"]
  MlM416xlarge,
  #[wire = "ml.c4.xlarge"]
  MlC4Xlarge,
  #[wire = "ml.c4.2xlarge"]
  MlC42xlarge,
  #[wire = "ml.c4.4xlarge"]
  MlC44xlarge,
  #[wire = "ml.c4.8xlarge"]
  MlC48xlarge,
  #[wire = "ml.p2.xlarge"]
  MlP2Xlarge,
  #[wire = "ml.p2.8xlarge"]
  MlP28xlarge,
  #[wire = "ml.p2.16xlarge"]
  MlP216xlarge,
  #[wire = "ml.p3.2xlarge"]
  MlP32xlarge,
  #[wire = "ml.p3.8xlarge"]
  MlP38xlarge,
  #[wire = "ml.p3.16xlarge"]
  MlP316xlarge,
  #[wire = "ml.c5.xlarge"]
  MlC5Xlarge,
  #[wire = "ml.c5.2xlarge"]
  MlC52xlarge,
  #[wire = "ml.c5.4xlarge"]
  MlC54xlarge,
  #[wire = "ml.c5.9xlarge"]
  MlC59xlarge,
  #[wire = "ml.c5.18xlarge"]
  MlC518xlarge,
  #[wire = "ml.m5.large"]
  MlM5Large,
  #[wire = "ml.m5.xlarge"]
  MlM5Xlarge,
  #[wire = "ml.m5.2xlarge"]
  MlM52xlarge,
  #[wire = "ml.m5.4xlarge"]
  MlM54xlarge,
  #[wire = "ml.m5.12xlarge"]
  MlM512xlarge,
  #[wire = "ml.m5.24xlarge"]
  MlM524xlarge,
}

/// Instance types for processing jobs, including debugger rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum ProcessingInstanceType {
  #[wire = "ml.t3.medium"]
  MlT3Medium,
  #[wire = "ml.t3.large"]
  MlT3Large,
  #[wire = "ml.t3.xlarge"]
  MlT3Xlarge,
  #[wire = "ml.t3.2xlarge"]
  MlT32xlarge,
  #[wire = "ml.m4.xlarge"]
  MlM4Xlarge,
  #[wire = "ml.m4.2xlarge"]
  MlM42xlarge,
  #[wire = "ml.m4.4xlarge"]
  MlM44xlarge,
  #[wire = "ml.m4.10xlarge"]
  MlM410xlarge,
  #[wire = "ml.m4.16xlarge"]
  MlM416xlarge,
  #[wire = "ml.c4.xlarge"]
  MlC4Xlarge,
  #[wire = "ml.c4.2xlarge"]
  MlC42xlarge,
  #[wire = "ml.c4.4xlarge"]
  MlC44xlarge,
  #[wire = "ml.c4.8xlarge"]
  MlC48xlarge,
  #[wire = "ml.p2.xlarge"]
  MlP2Xlarge,
  #[wire = "ml.p2.8xlarge"]
  MlP28xlarge,
  #[wire = "ml.p2.16xlarge"]
  MlP216xlarge,
  #[wire = "ml.p3.2xlarge"]
  MlP32xlarge,
  #[wire = "ml.p3.8xlarge"]
  MlP38xlarge,
  #[wire = "ml.p3.16xlarge"]
  MlP316xlarge,
  #[wire = "ml.c5.xlarge"]
  MlC5Xlarge,
  #[wire = "ml.c5.2xlarge"]
  MlC52xlarge,
  #[wire = "ml.c5.4xlarge"]
  MlC54xlarge,
  #[wire = "ml.c5.9xlarge"]
  MlC59xlarge,
  #[wire = "ml.c5.18xlarge"]
  MlC518xlarge,
  #[wire = "ml.m5.large"]
  MlM5Large,
  #[wire = "ml.m5.xlarge"]
  MlM5Xlarge,
  #[wire = "ml.m5.2xlarge"]
  MlM52xlarge,
  #[wire = "ml.m5.4xlarge"]
  MlM54xlarge,
  #[wire = "ml.m5.12xlarge"]
  MlM512xlarge,
  #[wire = "ml.m5.24xlarge"]
  MlM524xlarge,
  #[wire = "ml.r5.large"]
  MlR5Large,
  #[wire = "ml.r5.xlarge"]
  MlR5Xlarge,
  #[wire = "ml.r5.2xlarge"]
  MlR52xlarge,
  #[wire = "ml.r5.4xlarge"]
  MlR54xlarge,
  #[wire = "ml.r5.8xlarge"]
  MlR58xlarge,
  #[wire = "ml.r5.12xlarge"]
  MlR512xlarge,
  #[wire = "ml.r5.16xlarge"]
  MlR516xlarge,
  #[wire = "ml.r5.24xlarge"]
  MlR524xlarge,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn variant_names_track_wire_strings() {
    assert_eq!(InstanceType::MlT2Medium.as_str(), "ml.t2.medium");
    assert_eq!(InstanceType::MlC5d18xlarge.as_str(), "ml.c5d.18xlarge");
    assert_eq!(
      TrainingInstanceType::from_value("ml.p3dn.24xlarge"),
      Ok(TrainingInstanceType::MlP3dn24xlarge)
    );
  }

  #[test]
  fn instance_families_are_distinct() {
    assert!(InstanceType::from_value("ml.g4dn.xlarge").is_err());
    assert!(TrainingInstanceType::from_value("ml.t2.medium").is_err());
    assert_eq!(InstanceType::VALUES.len(), 38);
  }
}
