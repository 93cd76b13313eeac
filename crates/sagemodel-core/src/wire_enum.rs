//! The closed-enumeration contract.

use std::{collections::HashMap, fmt, hash::Hash};

use crate::{Error, Result};

/// A closed set of constants, each bound to one canonical wire-string.
///
/// Implemented by `#[derive(WireEnum)]`, which also provides `Display`,
/// `FromStr`, `TryFrom<&str>`, `From<Self> for String` and serde impls that
/// all go through the wire-string.
pub trait WireEnum:
  Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
  const DESCRIPTOR: EnumDescriptor;

  /// Every constant, in declaration order.
  const VALUES: &'static [Self];

  fn as_str(&self) -> &'static str;

  /// Wire-string to constant. Built once on first use.
  #[doc(hidden)]
  fn lookup_table() -> &'static HashMap<&'static str, Self>;

  /// Resolves a wire-string. Matching is exact and case-sensitive.
  fn from_value(value: &str) -> Result<Self> {
    if value.is_empty() {
      return Err(Error::EmptyEnumValue {
        enumeration: Self::DESCRIPTOR.name,
      });
    }
    Self::lookup_table().get(value).copied().ok_or_else(|| {
      Error::UnknownEnumValue {
        enumeration: Self::DESCRIPTOR.name,
        value:       value.to_owned(),
      }
    })
  }

  /// Like [`WireEnum::from_value`], treating `None` as empty.
  fn from_optional(value: Option<&str>) -> Result<Self> {
    match value {
      Some(value) => Self::from_value(value),
      None => Err(Error::EmptyEnumValue {
        enumeration: Self::DESCRIPTOR.name,
      }),
    }
  }
}

/// Name and ordered wire values of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDescriptor {
  pub name:        &'static str,
  pub wire_values: &'static [&'static str],
}

impl EnumDescriptor {
  pub fn contains(&self, value: &str) -> bool {
    self.wire_values.contains(&value)
  }

  /// Same rules as [`WireEnum::from_optional`], yielding the canonical
  /// wire-string. Used where only the descriptor is known.
  pub fn resolve(&self, value: Option<&str>) -> Result<&'static str> {
    let value = match value {
      Some(value) if !value.is_empty() => value,
      _ => {
        return Err(Error::EmptyEnumValue {
          enumeration: self.name,
        });
      }
    };
    self
      .wire_values
      .iter()
      .copied()
      .find(|wire| *wire == value)
      .ok_or_else(|| Error::UnknownEnumValue {
        enumeration: self.name,
        value:       value.to_owned(),
      })
  }
}
