use std::{
  collections::BTreeMap,
  hash::{DefaultHasher, Hash, Hasher},
};

use chrono::DateTime;
use pretty_assertions::assert_eq;
use sagemodel_core::{
  Error, Record, Request, WireEnum,
  record::{FieldInfo, FieldShape, RecordDescriptor},
};
use serde_json::{Value, json};

use crate::{catalog, operation::OperationVisitor, *};

fn hash_of<T: Hash>(value: &T) -> u64 {
  let mut hasher = DefaultHasher::new();
  value.hash(&mut hasher);
  hasher.finish()
}

// ─── Sample payloads ─────────────────────────────────────────────────────────

/// A JSON object with every field of `descriptor` set, nesting records up
/// to `depth` levels.
fn sample(descriptor: &RecordDescriptor, depth: usize) -> Value {
  let mut object = serde_json::Map::new();
  if depth == 0 {
    return Value::Object(object);
  }
  for field in descriptor.fields {
    let value = sample_value(field, depth);
    let value = if field.list { Value::Array(vec![value]) } else { value };
    object.insert(field.wire_name.to_owned(), value);
  }
  Value::Object(object)
}

fn sample_value(field: &FieldInfo, depth: usize) -> Value {
  match field.shape {
    FieldShape::String => match field.enumeration {
      Some(enumeration) => json!(enumeration.wire_values[0]),
      None => json!(format!("sample-{}", field.name)),
    },
    FieldShape::Integer => json!(7),
    FieldShape::Long => json!(9_000_000_000_i64),
    FieldShape::Boolean => json!(true),
    FieldShape::Float => json!(0.5),
    FieldShape::Timestamp => json!(1_577_836_800),
    FieldShape::Map => json!({ "alpha": "1", "beta": "2" }),
    FieldShape::Record(name) => {
      let nested = catalog::record(name).unwrap();
      sample(nested, depth - 1)
    }
  }
}

fn check_record<R: Record>() {
  let unset = R::default();
  assert!(unset.is_unset(), "{}", R::DESCRIPTOR.name);
  assert_eq!(unset.to_string(), "{}", "{}", R::DESCRIPTOR.name);

  let payload = sample(&R::DESCRIPTOR, 3);
  let a: R = serde_json::from_value(payload.clone()).unwrap();
  let b: R = serde_json::from_value(payload).unwrap();
  assert_eq!(a, b);
  assert_eq!(hash_of(&a), hash_of(&b));
  assert_eq!(a, a.clone());

  let rendered = a.to_string();
  for field in R::DESCRIPTOR.fields {
    assert!(
      rendered.contains(&format!("{}: ", field.wire_name)),
      "{} is missing {} in {rendered}",
      R::DESCRIPTOR.name,
      field.wire_name,
    );
  }

  if !R::DESCRIPTOR.fields.is_empty() {
    assert!(!a.is_unset());
    assert_ne!(a, unset);
    assert_ne!(unset, a);
  }

  let reparsed: R =
    serde_json::from_value(serde_json::to_value(&a).unwrap()).unwrap();
  assert_eq!(reparsed, a);
}

macro_rules! check_records {
  ($($record:ty),* $(,)?) => {{
    let mut checked = Vec::new();
    $(
      check_record::<$record>();
      checked.push(<$record as Record>::DESCRIPTOR.name);
    )*
    checked
  }};
}

#[test]
fn every_record_obeys_equality_and_rendering_laws() {
  let checked = check_records!(
    Channel,
    DataSource,
    S3DataSource,
    FileSystemDataSource,
    ShuffleConfig,
    OutputDataConfig,
    ResourceConfig,
    VpcConfig,
    StoppingCondition,
    CheckpointConfig,
    Tag,
    ExperimentConfig,
    EmptyResult,
    AlgorithmSpecification,
    MetricDefinition,
    DebugHookConfig,
    CollectionConfiguration,
    DebugRuleConfiguration,
    TensorBoardOutputConfig,
    DebugRuleEvaluationStatus,
    ModelArtifacts,
    SecondaryStatusTransition,
    MetricData,
    TrainingJob,
    TrainingJobSummary,
    CreateTrainingJobRequest,
    CreateTrainingJobResult,
    StopTrainingJobRequest,
    ListTrainingJobsRequest,
    ListTrainingJobsResult,
    Filter,
    NestedFilters,
    SearchExpression,
    SearchRecord,
    SearchRequest,
    SearchResult,
    HyperParameterTuningJobObjective,
    ResourceLimits,
    IntegerParameterRange,
    ContinuousParameterRange,
    CategoricalParameterRange,
    ParameterRanges,
    HyperParameterTuningJobConfig,
    HyperParameterAlgorithmSpecification,
    HyperParameterTrainingJobDefinition,
    CreateHyperParameterTuningJobRequest,
    CreateHyperParameterTuningJobResult,
    TransformS3DataSource,
    TransformDataSource,
    TransformInput,
    TransformOutput,
    TransformResources,
    DataProcessing,
    CreateTransformJobRequest,
    CreateTransformJobResult,
    StopTransformJobRequest,
    CreateNotebookInstanceRequest,
    CreateNotebookInstanceResult,
    DescribeNotebookInstanceRequest,
    DescribeNotebookInstanceResult,
    UpdateNotebookInstanceRequest,
    StartNotebookInstanceRequest,
    StopNotebookInstanceRequest,
    DeleteNotebookInstanceRequest,
    Usd,
    PublicWorkforceTaskPrice,
    UiConfig,
    AnnotationConsolidationConfig,
    HumanLoopConfig,
    HumanTaskConfig,
  );
  let catalogued: Vec<_> = catalog::RECORDS.iter().map(|d| d.name).collect();
  assert_eq!(checked, catalogued);
}

// ─── Enumerations ────────────────────────────────────────────────────────────

fn check_enum<E: WireEnum>() {
  let name = E::DESCRIPTOR.name;
  assert_eq!(E::VALUES.len(), E::DESCRIPTOR.wire_values.len(), "{name}");
  for value in E::VALUES {
    assert_eq!(E::from_value(value.as_str()), Ok(*value));
    assert_eq!(value.to_string(), value.as_str());
    assert!(E::DESCRIPTOR.contains(value.as_str()));
  }
  assert_eq!(
    E::from_value(""),
    Err(Error::EmptyEnumValue { enumeration: name })
  );
  assert_eq!(
    E::from_optional(None),
    Err(Error::EmptyEnumValue { enumeration: name })
  );
  assert_eq!(
    E::from_value("__not_a_real_value__"),
    Err(Error::UnknownEnumValue {
      enumeration: name,
      value:       "__not_a_real_value__".to_owned(),
    })
  );
}

macro_rules! check_enums {
  ($($enumeration:ty),* $(,)?) => {{
    let mut checked = Vec::new();
    $(
      check_enum::<$enumeration>();
      checked.push(<$enumeration as WireEnum>::DESCRIPTOR.name);
    )*
    checked
  }};
}

#[test]
fn every_enumeration_round_trips() {
  let checked = check_enums!(
    TrainingJobStatus,
    SecondaryStatus,
    NotebookInstanceStatus,
    RuleEvaluationStatus,
    InstanceType,
    NotebookInstanceAcceleratorType,
    TrainingInstanceType,
    TransformInstanceType,
    ProcessingInstanceType,
    DirectInternetAccess,
    RootAccess,
    TrainingInputMode,
    CompressionType,
    RecordWrapper,
    S3DataType,
    S3DataDistribution,
    FileSystemAccessMode,
    FileSystemType,
    SplitType,
    AssemblyType,
    JoinSource,
    BatchStrategy,
    HyperParameterTuningJobObjectiveType,
    HyperParameterScalingType,
    HyperParameterTuningJobStrategyType,
    TrainingJobEarlyStoppingType,
    SortBy,
    SortOrder,
    ResourceType,
    SearchSortOrder,
    BooleanOperator,
    Operator,
    Operation,
  );
  let catalogued: Vec<_> =
    catalog::ENUMERATIONS.iter().map(|d| d.name).collect();
  assert_eq!(checked, catalogued);
}

#[test]
fn enum_lookup_is_exact() {
  assert_eq!(
    NotebookInstanceStatus::from_value("InService"),
    Ok(NotebookInstanceStatus::InService)
  );
  assert!(NotebookInstanceStatus::from_value("inservice").is_err());
  assert!(NotebookInstanceStatus::from_value("InService ").is_err());
  assert!(InstanceType::from_value("ML.T2.MEDIUM").is_err());
  assert_eq!(FileSystemAccessMode::Rw.as_str(), "rw");
  assert_eq!(SplitType::TfRecord.as_str(), "TFRecord");
  assert_eq!(CompressionType::None.as_str(), "None");
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn name_only_renders_one_pair() {
  let metric = MetricDefinition::default().with_name("foo");
  assert_eq!(metric.to_string(), "{Name: foo}");
}

#[test]
fn described_notebook_renders_set_fields_in_order() {
  let result = DescribeNotebookInstanceResult::default()
    .with_notebook_instance_status(NotebookInstanceStatus::InService)
    .with_notebook_instance_name("nb-1")
    .with_volume_size_in_gb(5)
    .with_creation_time(DateTime::from_timestamp(1_577_836_800, 0).unwrap());
  assert_eq!(
    result.to_string(),
    "{NotebookInstanceName: nb-1,NotebookInstanceStatus: InService,\
     CreationTime: 2020-01-01T00:00:00Z,VolumeSizeInGB: 5}"
  );
}

#[test]
fn training_request_builds_fluently() {
  let request = CreateTrainingJobRequest::default()
    .with_training_job_name("xgb-1")
    .with_role_arn("arn:aws:iam::123456789012:role/sm")
    .with_algorithm_specification(
      AlgorithmSpecification::default()
        .with_training_image("xgboost:1")
        .with_training_input_mode(TrainingInputMode::File),
    )
    .with_input_data_config([Channel::default().with_channel_name("train")])
    .with_input_data_config([
      Channel::default().with_channel_name("validation")
    ])
    .with_resource_config(
      ResourceConfig::default()
        .with_instance_type(TrainingInstanceType::MlM5Xlarge)
        .with_instance_count(1)
        .with_volume_size_in_gb(10),
    )
    .add_hyper_parameters_entry("eta", "0.2")
    .unwrap();

  let channels: Vec<_> = request
    .input_data_config()
    .unwrap_or_default()
    .iter()
    .filter_map(Channel::channel_name)
    .collect();
  assert_eq!(channels, ["train", "validation"]);
  assert_eq!(
    request.resource_config().and_then(ResourceConfig::instance_type),
    Some("ml.m5.xlarge")
  );
  assert_eq!(
    request.hyper_parameters(),
    Some(&BTreeMap::from([("eta".to_owned(), "0.2".to_owned())]))
  );
  assert_eq!(
    request.to_string(),
    "{TrainingJobName: xgb-1,HyperParameters: {eta=0.2},\
     AlgorithmSpecification: {TrainingImage: xgboost:1,TrainingInputMode: File},\
     RoleArn: arn:aws:iam::123456789012:role/sm,\
     InputDataConfig: [{ChannelName: train}, {ChannelName: validation}],\
     ResourceConfig: {InstanceType: ml.m5.xlarge,InstanceCount: 1,VolumeSizeInGB: 10}}"
  );
}

#[test]
fn duplicate_hyper_parameter_is_rejected() {
  let err = CreateTrainingJobRequest::default()
    .add_hyper_parameters_entry("eta", "0.2")
    .and_then(|request| request.add_hyper_parameters_entry("eta", "0.3"))
    .unwrap_err();
  assert_eq!(
    err.to_string(),
    "duplicated key (eta) provided for HyperParameters"
  );
  assert!(err.is_invalid_argument());
}

#[test]
fn transform_environment_entries_can_be_cleared() {
  let request = CreateTransformJobRequest::default()
    .with_environment([("MODE", "batch")])
    .add_environment_entry("THREADS", "4")
    .unwrap();
  assert_eq!(request.environment().map(BTreeMap::len), Some(2));
  let request = request.clear_environment_entries();
  assert!(request.environment().is_none());
}

#[test]
fn list_setter_copies_its_input() {
  let mut groups = vec!["sg-1".to_owned(), "sg-2".to_owned()];
  let mut request = CreateNotebookInstanceRequest::default();
  request.set_security_group_ids(groups.iter().cloned());
  groups.clear();
  assert_eq!(
    request.security_group_ids(),
    Some(&["sg-1".to_owned(), "sg-2".to_owned()][..])
  );
}

#[test]
fn enum_lists_accept_constants() {
  let request = UpdateNotebookInstanceRequest::default()
    .with_accelerator_types([NotebookInstanceAcceleratorType::MlEia1Medium])
    .with_accelerator_types(["ml.eia2.large"]);
  assert_eq!(
    request.accelerator_types(),
    Some(&["ml.eia1.medium".to_owned(), "ml.eia2.large".to_owned()][..])
  );
}

#[test]
fn unknown_enum_strings_are_carried_verbatim() {
  let payload = json!({ "NotebookInstanceStatus": "Hibernating" });
  let result: DescribeNotebookInstanceResult =
    serde_json::from_value(payload).unwrap();
  assert_eq!(result.notebook_instance_status(), Some("Hibernating"));
  assert!(
    NotebookInstanceStatus::from_optional(result.notebook_instance_status())
      .is_err()
  );
}

#[test]
fn objective_type_uses_reserved_wire_name() {
  let objective = HyperParameterTuningJobObjective::default()
    .with_objective_type(HyperParameterTuningJobObjectiveType::Maximize)
    .with_metric_name("validation:auc");
  let value = serde_json::to_value(&objective).unwrap();
  assert_eq!(value["Type"], "Maximize");
  assert_eq!(objective.to_string(), "{Type: Maximize,MetricName: validation:auc}");
}

// ─── Catalog and operations ──────────────────────────────────────────────────

#[test]
fn catalog_is_closed_over_nesting() {
  for descriptor in catalog::RECORDS {
    for nested in descriptor.nested_records() {
      assert!(catalog::record(nested).is_ok(), "{nested}");
    }
    for field in descriptor.fields {
      if let Some(enumeration) = field.enumeration {
        assert_eq!(catalog::enumeration(enumeration.name), Ok(enumeration));
      }
    }
  }
}

#[test]
fn catalog_lookup() {
  assert_eq!(catalog::lookup("InstanceType", "ml.t2.medium"), Ok("ml.t2.medium"));
  assert!(matches!(
    catalog::lookup("InstanceType", ""),
    Err(Error::EmptyEnumValue { .. })
  ));
  assert!(matches!(
    catalog::lookup("InstanceType", "ml.t2.tiny"),
    Err(Error::UnknownEnumValue { .. })
  ));
  let err = catalog::lookup("Flavour", "x").unwrap_err();
  assert_eq!(err, Error::UnknownType {
    kind: "enumeration",
    name: "Flavour".to_owned(),
  });
  assert!(!err.is_invalid_argument());
  assert!(catalog::record("TrainingJob").is_ok());
  assert!(catalog::record("Nope").is_err());
}

struct OperationName;

impl OperationVisitor for OperationName {
  type Output = &'static str;

  fn visit<R: Request>(self) -> Self::Output { R::OPERATION }
}

#[test]
fn operations_bind_their_request_types() {
  for operation in Operation::VALUES {
    assert_eq!(operation.accept(OperationName), operation.as_str());
    assert_eq!(
      operation.request_descriptor().name,
      format!("{}Request", operation.as_str())
    );
  }
  assert_eq!(
    Operation::StopTrainingJob.response_descriptor(),
    EmptyResult::DESCRIPTOR
  );
  assert_eq!(
    Operation::Search.response_descriptor().name,
    "SearchResult"
  );
  assert_eq!(CreateTrainingJobRequest::OPERATION, "CreateTrainingJob");
}
