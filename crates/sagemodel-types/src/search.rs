//! The `Search` operation: a boolean expression of property filters over
//! one resource type.

use sagemodel_core::Record;
use serde::{Deserialize, Serialize};

use crate::{
  enums::{BooleanOperator, Operator, ResourceType, SearchSortOrder},
  training::TrainingJob,
};

/// A single property comparison, e.g. `Metrics.accuracy GreaterThan 0.9`.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct Filter {
  /// Length 1 - 255, pattern `.+`.
  pub name:     Option<String>,
  #[record(enumeration = Operator)]
  pub operator: Option<String>,
  /// Length 1 - 1024, pattern `.+`.
  pub value:    Option<String>,
}

/// Filters applied to the elements of one nested list property.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct NestedFilters {
  pub nested_property_name: Option<String>,
  /// 1 - 20 entries.
  pub filters:              Option<Vec<Filter>>,
}

/// Filters, nested filters and sub-expressions joined by one operator.
/// Expressions nest at most five levels deep on the service side.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchExpression {
  /// 1 - 20 entries.
  pub filters:         Option<Vec<Filter>>,
  /// 1 - 20 entries.
  pub nested_filters:  Option<Vec<NestedFilters>>,
  /// 1 - 20 entries.
  pub sub_expressions: Option<Vec<SearchExpression>>,
  #[record(enumeration = BooleanOperator)]
  pub operator:        Option<String>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchRecord {
  pub training_job: Option<TrainingJob>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchRequest {
  #[record(enumeration = ResourceType)]
  pub resource:          Option<String>,
  pub search_expression: Option<SearchExpression>,
  /// Property name to sort by. Length 1 - 255, pattern `.+`.
  pub sort_by:           Option<String>,
  #[record(enumeration = SearchSortOrder)]
  pub sort_order:        Option<String>,
  /// Max length 8192.
  pub next_token:        Option<String>,
  /// Range 1 - 100.
  pub max_results:       Option<i32>,
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchResult {
  pub results:    Option<Vec<SearchRecord>>,
  pub next_token: Option<String>,
}
