//! Human review task settings for labeling and augmented-AI workflows.

use sagemodel_core::Record;
use serde::{Deserialize, Serialize};

/// A price in US dollars, split the way the service bills it.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct Usd {
  /// Range 0 - 2.
  pub dollars:                   Option<i32>,
  /// Range 0 - 99.
  pub cents:                     Option<i32>,
  /// Range 0 - 9.
  pub tenth_fractions_of_a_cent: Option<i32>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct PublicWorkforceTaskPrice {
  pub amount_in_usd: Option<Usd>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct UiConfig {
  /// Max length 1024.
  pub ui_template_s3_uri: Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct AnnotationConsolidationConfig {
  /// Max length 2048.
  pub annotation_consolidation_lambda_arn: Option<String>,
}

/// Work team and task settings for a human review loop.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct HumanLoopConfig {
  /// Max length 256.
  pub workteam_arn:                          Option<String>,
  /// Max length 1024.
  pub human_task_ui_arn:                     Option<String>,
  /// Length 1 - 128.
  pub task_title:                            Option<String>,
  /// Length 1 - 255.
  pub task_description:                      Option<String>,
  /// Range 1 - 3.
  pub task_count:                            Option<i32>,
  /// Range 1 - 864000.
  pub task_availability_lifetime_in_seconds: Option<i32>,
  /// Range 30 and up.
  pub task_time_limit_in_seconds:            Option<i32>,
  /// 1 - 5 entries.
  pub task_keywords:                         Option<Vec<String>>,
  pub public_workforce_task_price:           Option<PublicWorkforceTaskPrice>,
}

/// Settings shared by every task of a labeling job.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct HumanTaskConfig {
  pub workteam_arn:                           Option<String>,
  pub ui_config:                              Option<UiConfig>,
  /// Max length 2048.
  pub pre_human_task_lambda_arn:              Option<String>,
  /// 1 - 5 entries.
  pub task_keywords:                          Option<Vec<String>>,
  pub task_title:                             Option<String>,
  pub task_description:                       Option<String>,
  /// Range 1 - 9.
  pub number_of_human_workers_per_data_object: Option<i32>,
  /// Range 30 - 28800.
  pub task_time_limit_in_seconds:             Option<i32>,
  /// Range 60 - 864000.
  pub task_availability_lifetime_in_seconds:  Option<i32>,
  /// Range 1 - 1000.
  pub max_concurrent_task_count:              Option<i32>,
  pub annotation_consolidation_config:        Option<AnnotationConsolidationConfig>,
  pub public_workforce_task_price:            Option<PublicWorkforceTaskPrice>,
}
