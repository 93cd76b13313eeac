//! Debug-string rendering shared by every generated `Display` impl.

use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::float::Float;

/// A value that can appear inside a record's debug string.
pub trait WireDisplay {
  fn fmt_wire(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! display_as_is {
  ($($ty:ty),* $(,)?) => {
    $(
      impl WireDisplay for $ty {
        fn fmt_wire(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
          fmt::Display::fmt(self, f)
        }
      }
    )*
  };
}

display_as_is!(String, i32, i64, bool, Float);

impl WireDisplay for DateTime<Utc> {
  fn fmt_wire(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
  }
}

impl<T: WireDisplay> WireDisplay for Vec<T> {
  fn fmt_wire(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in self.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      item.fmt_wire(f)?;
    }
    f.write_str("]")
  }
}

impl<K: fmt::Display, V: fmt::Display> WireDisplay for BTreeMap<K, V> {
  fn fmt_wire(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, value)) in self.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{key}={value}")?;
    }
    f.write_str("}")
  }
}

/// Writes `{Name: value,Other: value}`, skipping unset fields.
///
/// Modelled on `std::fmt::DebugStruct`: the first write error is kept and
/// every later call becomes a no-op.
pub struct RecordFormatter<'a, 'b> {
  f:          &'a mut fmt::Formatter<'b>,
  has_fields: bool,
  result:     fmt::Result,
}

impl<'a, 'b> RecordFormatter<'a, 'b> {
  pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
    let result = f.write_str("{");
    Self {
      f,
      has_fields: false,
      result,
    }
  }

  pub fn field<T>(&mut self, wire_name: &str, value: Option<&T>) -> &mut Self
  where
    T: WireDisplay + ?Sized,
  {
    if let Some(value) = value {
      if self.result.is_ok() {
        self.result = self.write_field(wire_name, value);
      }
      self.has_fields = true;
    }
    self
  }

  fn write_field<T>(&mut self, wire_name: &str, value: &T) -> fmt::Result
  where
    T: WireDisplay + ?Sized,
  {
    if self.has_fields {
      self.f.write_str(",")?;
    }
    self.f.write_str(wire_name)?;
    self.f.write_str(": ")?;
    value.fmt_wire(self.f)
  }

  pub fn finish(&mut self) -> fmt::Result {
    self.result?;
    self.f.write_str("}")
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  struct Sample {
    name:   Option<String>,
    tags:   Option<Vec<String>>,
    params: Option<BTreeMap<String, String>>,
  }

  impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      let mut out = RecordFormatter::new(f);
      out.field("Name", self.name.as_ref());
      out.field("Tags", self.tags.as_ref());
      out.field("Params", self.params.as_ref());
      out.finish()
    }
  }

  #[test]
  fn skips_unset_fields() {
    let sample = Sample {
      name:   None,
      tags:   Some(vec!["a".into(), "b".into()]),
      params: None,
    };
    assert_eq!(sample.to_string(), "{Tags: [a, b]}");
  }

  #[test]
  fn joins_fields_with_commas() {
    let sample = Sample {
      name:   Some("foo".into()),
      tags:   Some(Vec::new()),
      params: Some(BTreeMap::from([
        ("epochs".to_owned(), "10".to_owned()),
        ("eta".to_owned(), "0.1".to_owned()),
      ])),
    };
    assert_eq!(
      sample.to_string(),
      "{Name: foo,Tags: [],Params: {epochs=10, eta=0.1}}"
    );
  }

  #[test]
  fn timestamps_render_as_rfc3339() {
    struct At(DateTime<Utc>);
    impl fmt::Display for At {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_wire(f)
      }
    }
    let at = DateTime::from_timestamp(1_577_836_800, 0).unwrap();
    assert_eq!(At(at).to_string(), "2020-01-01T00:00:00Z");
  }
}
