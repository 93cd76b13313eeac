use sagemodel_core::WireEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum HyperParameterTuningJobObjectiveType {
  Maximize,
  Minimize,
}

/// Scale a tuning job searches a numeric range on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum HyperParameterScalingType {
  Auto,
  Linear,
  Logarithmic,
  ReverseLogarithmic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum HyperParameterTuningJobStrategyType {
  Bayesian,
  Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum TrainingJobEarlyStoppingType {
  Off,
  Auto,
}
