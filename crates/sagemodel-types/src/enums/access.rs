use sagemodel_core::WireEnum;

/// Whether a notebook instance can reach the internet directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum DirectInternetAccess {
  Enabled,
  Disabled,
}

/// Whether notebook users get root access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireEnum)]
pub enum RootAccess {
  Enabled,
  Disabled,
}
