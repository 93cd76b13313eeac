//! Single-precision float with total equality.

use std::{
  collections::BTreeMap,
  fmt,
  hash::{Hash, Hasher},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `f32` wrapper whose equality and hash are defined on the bit pattern.
///
/// All NaNs compare equal to each other, and `0.0 != -0.0`. This keeps
/// records that contain floats `Eq + Hash` with `a == b` implying equal
/// hashes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Float(pub f32);

impl Float {
  pub const fn get(self) -> f32 { self.0 }

  fn canonical_bits(self) -> u32 {
    if self.0.is_nan() {
      f32::NAN.to_bits()
    } else {
      self.0.to_bits()
    }
  }
}

impl PartialEq for Float {
  fn eq(&self, other: &Self) -> bool {
    self.canonical_bits() == other.canonical_bits()
  }
}

impl Eq for Float {}

impl Hash for Float {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.canonical_bits().hash(state);
  }
}

impl From<f32> for Float {
  fn from(value: f32) -> Self { Self(value) }
}

impl From<Float> for f32 {
  fn from(value: Float) -> Self { value.0 }
}

impl fmt::Display for Float {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

// ─── Finiteness ──────────────────────────────────────────────────────────────

/// Finds NaN or infinite [`Float`]s inside a field value. JSON has no
/// spelling for them.
pub trait FloatCheck {
  /// Path to the first non-finite float below `self`: empty for the float
  /// itself, `[i]` for a list element and `.Name` for a record field.
  fn non_finite(&self) -> Option<String>;
}

impl FloatCheck for Float {
  fn non_finite(&self) -> Option<String> {
    (!self.0.is_finite()).then(String::new)
  }
}

macro_rules! always_finite {
  ($($ty:ty),* $(,)?) => {
    $(
      impl FloatCheck for $ty {
        fn non_finite(&self) -> Option<String> { None }
      }
    )*
  };
}

always_finite!(String, i32, i64, bool, DateTime<Utc>);

impl<K, V> FloatCheck for BTreeMap<K, V> {
  fn non_finite(&self) -> Option<String> { None }
}

impl<T: FloatCheck> FloatCheck for Option<T> {
  fn non_finite(&self) -> Option<String> {
    self.as_ref().and_then(T::non_finite)
  }
}

impl<T: FloatCheck> FloatCheck for Vec<T> {
  fn non_finite(&self) -> Option<String> {
    self.iter().enumerate().find_map(|(i, item)| {
      item.non_finite().map(|rest| format!("[{i}]{rest}"))
    })
  }
}
