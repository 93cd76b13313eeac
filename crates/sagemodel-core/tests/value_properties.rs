//! Law-style properties of the core value types.

use std::hash::{DefaultHasher, Hash, Hasher};

use chrono::DateTime;
use proptest::prelude::*;
use sagemodel_core::{
  Float,
  timestamp::{from_epoch_seconds, to_epoch_seconds},
};

fn hash_of<T: Hash>(value: &T) -> u64 {
  let mut hasher = DefaultHasher::new();
  value.hash(&mut hasher);
  hasher.finish()
}

proptest! {
  #[test]
  fn float_equality_is_reflexive(bits in any::<u32>()) {
    let value = Float(f32::from_bits(bits));
    prop_assert_eq!(value, value);
  }

  #[test]
  fn equal_floats_hash_equally(a in any::<f32>(), b in any::<f32>()) {
    let (a, b) = (Float(a), Float(b));
    if a == b {
      prop_assert_eq!(hash_of(&a), hash_of(&b));
    }
    prop_assert_eq!(a == b, b == a);
  }

  #[test]
  fn epoch_seconds_round_trip(millis in -62_135_596_800_000_i64..253_402_300_799_000) {
    let at = DateTime::from_timestamp_millis(millis).unwrap();
    prop_assert_eq!(from_epoch_seconds(to_epoch_seconds(at)), Some(at));
  }
}
