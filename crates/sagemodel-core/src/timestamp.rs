//! Timestamps as epoch seconds on the wire.
//!
//! Fields of type `Option<DateTime<Utc>>` use
//! `#[serde(with = "sagemodel_core::timestamp::epoch_seconds")]`. Whole
//! seconds serialize as integers, anything finer as a fractional number with
//! millisecond precision. Deserialization also accepts RFC 3339 strings.
//!
//! Millisecond precision is the whole story: generated setters and the
//! deserializer truncate to it, and serializing a value that still carries
//! sub-millisecond digits (a struct literal) is an error rather than a
//! silent rounding.

use chrono::{DateTime, SubsecRound, Utc};

/// Drops everything below the millisecond.
pub fn truncate_to_millis(value: DateTime<Utc>) -> DateTime<Utc> {
  value.trunc_subsecs(3)
}

/// True when `value` survives the wire unchanged.
pub fn is_millisecond_precise(value: DateTime<Utc>) -> bool {
  value.timestamp_subsec_nanos() % 1_000_000 == 0
}

/// Seconds since the Unix epoch, with millisecond precision.
pub fn to_epoch_seconds(value: DateTime<Utc>) -> f64 {
  value.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`to_epoch_seconds`]. `None` for non-finite or out-of-range
/// input.
pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
  if !seconds.is_finite() {
    return None;
  }
  let millis = (seconds * 1000.0).round();
  if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
    return None;
  }
  DateTime::from_timestamp_millis(millis as i64)
}

pub mod epoch_seconds {
  use std::fmt;

  use chrono::{DateTime, Utc};
  use serde::{
    Deserializer, Serializer,
    de::{self, Visitor},
    ser,
  };

  pub fn serialize<S>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match value {
      Some(value) => {
        if !super::is_millisecond_precise(*value) {
          return Err(<S::Error as ser::Error>::custom(format!(
            "timestamp {value} is finer than a millisecond"
          )));
        }
        let millis = value.timestamp_millis();
        if millis % 1000 == 0 {
          serializer.serialize_i64(millis / 1000)
        } else {
          serializer.serialize_f64(super::to_epoch_seconds(*value))
        }
      }
      None => serializer.serialize_none(),
    }
  }

  pub fn deserialize<'de, D>(
    deserializer: D,
  ) -> Result<Option<DateTime<Utc>>, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_option(OptionalTimestampVisitor)
  }

  struct OptionalTimestampVisitor;

  impl<'de> Visitor<'de> for OptionalTimestampVisitor {
    type Value = Option<DateTime<Utc>>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("an optional timestamp")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> { Ok(None) }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> { Ok(None) }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
      D: Deserializer<'de>,
    {
      deserializer.deserialize_any(TimestampVisitor).map(Some)
    }
  }

  struct TimestampVisitor;

  impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = DateTime<Utc>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("epoch seconds or an RFC 3339 timestamp")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
      DateTime::from_timestamp(v, 0)
        .ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
      let seconds = i64::try_from(v)
        .map_err(|_| E::custom(format!("timestamp out of range: {v}")))?;
      self.visit_i64(seconds)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
      super::from_epoch_seconds(v)
        .ok_or_else(|| E::custom(format!("timestamp out of range: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
      DateTime::parse_from_rfc3339(v)
        .map(|value| super::truncate_to_millis(value.with_timezone(&Utc)))
        .map_err(E::custom)
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;
  use serde::{Deserialize, Serialize};

  use super::*;

  #[derive(Debug, PartialEq, Serialize, Deserialize)]
  struct Stamped {
    #[serde(with = "epoch_seconds", default)]
    at: Option<DateTime<Utc>>,
  }

  #[test]
  fn whole_seconds_serialize_as_integers() {
    let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single();
    let json = serde_json::to_string(&Stamped { at }).unwrap();
    assert_eq!(json, r#"{"at":1577836800}"#);
  }

  #[test]
  fn fractional_seconds_round_trip() {
    let at = DateTime::from_timestamp_millis(1_577_836_800_250);
    let json = serde_json::to_string(&Stamped { at }).unwrap();
    assert_eq!(json, r#"{"at":1577836800.25}"#);
    let back: Stamped = serde_json::from_str(&json).unwrap();
    assert_eq!(back.at, at);
  }

  #[test]
  fn accepts_rfc3339_and_null() {
    let parsed: Stamped =
      serde_json::from_str(r#"{"at":"2020-01-01T01:00:00+01:00"}"#).unwrap();
    assert_eq!(parsed.at, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single());

    let null: Stamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
    assert_eq!(null.at, None);
    let missing: Stamped = serde_json::from_str("{}").unwrap();
    assert_eq!(missing.at, None);
  }

  #[test]
  fn sub_millisecond_input_is_truncated() {
    let parsed: Stamped =
      serde_json::from_str(r#"{"at":"2020-01-01T00:00:00.000500Z"}"#).unwrap();
    assert_eq!(parsed.at, DateTime::from_timestamp(1_577_836_800, 0));

    let at = DateTime::from_timestamp(1_577_836_800, 1_250_999).unwrap();
    assert_eq!(
      truncate_to_millis(at),
      DateTime::from_timestamp(1_577_836_800, 1_000_000).unwrap()
    );
  }

  #[test]
  fn sub_millisecond_values_refuse_to_serialize() {
    let at = DateTime::from_timestamp(1_577_836_800, 500_000);
    let err = serde_json::to_string(&Stamped { at }).unwrap_err();
    assert!(err.to_string().contains("finer than a millisecond"));
  }

  #[test]
  fn rejects_non_finite_seconds() {
    assert_eq!(from_epoch_seconds(f64::INFINITY), None);
    assert_eq!(from_epoch_seconds(f64::NAN), None);
  }
}
