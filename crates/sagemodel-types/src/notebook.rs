//! Notebook instances and their lifecycle operations.

use chrono::{DateTime, Utc};
use sagemodel_core::Record;
use serde::{Deserialize, Serialize};

use crate::{
  common::Tag,
  enums::{
    DirectInternetAccess, InstanceType, NotebookInstanceAcceleratorType,
    NotebookInstanceStatus, RootAccess,
  },
};

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNotebookInstanceRequest {
  /// Max length 63, pattern `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`.
  pub notebook_instance_name:       Option<String>,
  #[record(enumeration = InstanceType)]
  pub instance_type:                Option<String>,
  /// Max length 32, pattern `[-0-9a-zA-Z]+`.
  pub subnet_id:                    Option<String>,
  /// Max 5 entries.
  pub security_group_ids:           Option<Vec<String>>,
  /// Length 20 - 2048.
  pub role_arn:                     Option<String>,
  /// Max length 2048.
  pub kms_key_id:                   Option<String>,
  /// 0 - 50 entries.
  pub tags:                         Option<Vec<Tag>>,
  /// Max length 63.
  pub lifecycle_config_name:        Option<String>,
  #[record(enumeration = DirectInternetAccess)]
  pub direct_internet_access:       Option<String>,
  /// Range 5 - 16384.
  #[serde(rename = "VolumeSizeInGB")]
  pub volume_size_in_gb:            Option<i32>,
  #[record(enumeration = NotebookInstanceAcceleratorType)]
  pub accelerator_types:            Option<Vec<String>>,
  /// Length 1 - 1024. A repository name or a git URL.
  pub default_code_repository:      Option<String>,
  /// Max 3 entries.
  pub additional_code_repositories: Option<Vec<String>>,
  #[record(enumeration = RootAccess)]
  pub root_access:                  Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNotebookInstanceResult {
  pub notebook_instance_arn: Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNotebookInstanceRequest {
  pub notebook_instance_name: Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNotebookInstanceResult {
  /// Max length 256.
  pub notebook_instance_arn:                   Option<String>,
  /// Max length 63.
  pub notebook_instance_name:                  Option<String>,
  #[record(enumeration = NotebookInstanceStatus)]
  pub notebook_instance_status:                Option<String>,
  /// Max length 1024.
  pub failure_reason:                          Option<String>,
  /// URL to connect to the Jupyter server.
  pub url:                                     Option<String>,
  #[record(enumeration = InstanceType)]
  pub instance_type:                           Option<String>,
  pub subnet_id:                               Option<String>,
  pub security_groups:                         Option<Vec<String>>,
  pub role_arn:                                Option<String>,
  pub kms_key_id:                              Option<String>,
  pub network_interface_id:                    Option<String>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub last_modified_time:                      Option<DateTime<Utc>>,
  #[serde(with = "sagemodel_core::timestamp::epoch_seconds")]
  pub creation_time:                           Option<DateTime<Utc>>,
  pub notebook_instance_lifecycle_config_name: Option<String>,
  #[record(enumeration = DirectInternetAccess)]
  pub direct_internet_access:                  Option<String>,
  #[serde(rename = "VolumeSizeInGB")]
  pub volume_size_in_gb:                       Option<i32>,
  #[record(enumeration = NotebookInstanceAcceleratorType)]
  pub accelerator_types:                       Option<Vec<String>>,
  pub default_code_repository:                 Option<String>,
  pub additional_code_repositories:            Option<Vec<String>>,
  #[record(enumeration = RootAccess)]
  pub root_access:                             Option<String>,
}

/// Changes to a stopped notebook instance. The `Disassociate*` flags remove
/// a setting instead of replacing it.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateNotebookInstanceRequest {
  pub notebook_instance_name:                   Option<String>,
  #[record(enumeration = InstanceType)]
  pub instance_type:                            Option<String>,
  pub role_arn:                                 Option<String>,
  pub lifecycle_config_name:                    Option<String>,
  pub disassociate_lifecycle_config:            Option<bool>,
  /// Range 5 - 16384.
  #[serde(rename = "VolumeSizeInGB")]
  pub volume_size_in_gb:                        Option<i32>,
  pub default_code_repository:                  Option<String>,
  pub additional_code_repositories:             Option<Vec<String>>,
  #[record(enumeration = NotebookInstanceAcceleratorType)]
  pub accelerator_types:                        Option<Vec<String>>,
  pub disassociate_accelerator_types:           Option<bool>,
  pub disassociate_default_code_repository:     Option<bool>,
  pub disassociate_additional_code_repositories: Option<bool>,
  #[record(enumeration = RootAccess)]
  pub root_access:                              Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartNotebookInstanceRequest {
  pub notebook_instance_name: Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopNotebookInstanceRequest {
  pub notebook_instance_name: Option<String>,
}

/// The instance must be stopped first.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteNotebookInstanceRequest {
  pub notebook_instance_name: Option<String>,
}
