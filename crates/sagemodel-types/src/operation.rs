//! API operations and the request and response records bound to them.
//!
//! The binding is static: every request record implements
//! [`Request`](sagemodel_core::Request), naming its operation and response
//! type. [`Operation`] carries the same table as a value so callers holding
//! only an operation name can still reach the bound types, through
//! [`OperationVisitor`].

use sagemodel_core::{EmptyResult, Record, Request, WireEnum, record::RecordDescriptor};

use crate::{
  notebook::{
    CreateNotebookInstanceRequest, CreateNotebookInstanceResult,
    DeleteNotebookInstanceRequest, DescribeNotebookInstanceRequest,
    DescribeNotebookInstanceResult, StartNotebookInstanceRequest,
    StopNotebookInstanceRequest, UpdateNotebookInstanceRequest,
  },
  search::{SearchRequest, SearchResult},
  training::{
    CreateTrainingJobRequest, CreateTrainingJobResult,
    ListTrainingJobsRequest, ListTrainingJobsResult, StopTrainingJobRequest,
  },
  transform::{
    CreateTransformJobRequest, CreateTransformJobResult,
    StopTransformJobRequest,
  },
  tuning::{
    CreateHyperParameterTuningJobRequest, CreateHyperParameterTuningJobResult,
  },
};

/// Receives the request type bound to an [`Operation`].
pub trait OperationVisitor {
  type Output;

  fn visit<R: Request>(self) -> Self::Output;
}

macro_rules! operations {
  ($($operation:ident => $request:ty => $response:ty),* $(,)?) => {
    /// Every operation the model binds, by its wire name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
    pub enum Operation {
      $($operation,)*
    }

    $(
      impl Request for $request {
        const OPERATION: &'static str = Operation::$operation.as_str();

        type Response = $response;
      }
    )*

    impl Operation {
      /// Calls `visitor` with the request type bound to this operation.
      pub fn accept<V: OperationVisitor>(self, visitor: V) -> V::Output {
        match self {
          $(Self::$operation => visitor.visit::<$request>(),)*
        }
      }
    }
  };
}

operations! {
  CreateTrainingJob => CreateTrainingJobRequest => CreateTrainingJobResult,
  StopTrainingJob => StopTrainingJobRequest => EmptyResult,
  ListTrainingJobs => ListTrainingJobsRequest => ListTrainingJobsResult,
  Search => SearchRequest => SearchResult,
  CreateHyperParameterTuningJob =>
    CreateHyperParameterTuningJobRequest => CreateHyperParameterTuningJobResult,
  CreateTransformJob => CreateTransformJobRequest => CreateTransformJobResult,
  StopTransformJob => StopTransformJobRequest => EmptyResult,
  CreateNotebookInstance =>
    CreateNotebookInstanceRequest => CreateNotebookInstanceResult,
  DescribeNotebookInstance =>
    DescribeNotebookInstanceRequest => DescribeNotebookInstanceResult,
  UpdateNotebookInstance => UpdateNotebookInstanceRequest => EmptyResult,
  StartNotebookInstance => StartNotebookInstanceRequest => EmptyResult,
  StopNotebookInstance => StopNotebookInstanceRequest => EmptyResult,
  DeleteNotebookInstance => DeleteNotebookInstanceRequest => EmptyResult,
}

struct Descriptors;

impl OperationVisitor for Descriptors {
  type Output = (RecordDescriptor, RecordDescriptor);

  fn visit<R: Request>(self) -> Self::Output {
    (R::DESCRIPTOR, <R::Response as Record>::DESCRIPTOR)
  }
}

impl Operation {
  pub fn request_descriptor(self) -> RecordDescriptor {
    self.accept(Descriptors).0
  }

  pub fn response_descriptor(self) -> RecordDescriptor {
    self.accept(Descriptors).1
  }
}
