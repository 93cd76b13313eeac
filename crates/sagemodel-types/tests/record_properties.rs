//! Property tests over generated records and enumerations.

use std::hash::{DefaultHasher, Hash, Hasher};

use proptest::prelude::*;
use sagemodel_core::WireEnum;
use sagemodel_types::{InstanceType, Tag, TrainingJobStatus, VpcConfig};

fn hash_of<T: Hash>(value: &T) -> u64 {
  let mut hasher = DefaultHasher::new();
  value.hash(&mut hasher);
  hasher.finish()
}

fn tag_strategy() -> impl Strategy<Value = Tag> {
  (
    proptest::option::of("[a-z]{1,8}"),
    proptest::option::of("[ -~]{0,12}"),
  )
    .prop_map(|(key, value)| Tag { key, value })
}

proptest! {
  #[test]
  fn equal_tags_hash_equally(tag in tag_strategy()) {
    let copy = tag.clone();
    prop_assert_eq!(&tag, &copy);
    prop_assert_eq!(hash_of(&tag), hash_of(&copy));
  }

  #[test]
  fn tag_equality_is_symmetric(a in tag_strategy(), b in tag_strategy()) {
    prop_assert_eq!(a == b, b == a);
    if a == b {
      prop_assert_eq!(hash_of(&a), hash_of(&b));
    }
  }

  #[test]
  fn builders_and_literals_agree(key in "[a-z]{1,8}", value in "[a-z]{0,8}") {
    let built = Tag::default().with_key(key.clone()).with_value(value.clone());
    let literal = Tag { key: Some(key.clone()), value: Some(value.clone()) };
    prop_assert_eq!(&built, &literal);
    prop_assert_eq!(built.to_string(), format!("{{Key: {key},Value: {value}}}"));
  }

  #[test]
  fn list_replace_preserves_order_and_copies(
    subnets in proptest::collection::vec("subnet-[0-9a-f]{4}", 0..8),
  ) {
    let mut source = subnets.clone();
    let mut config = VpcConfig::default();
    config.set_subnets(source.iter().cloned());
    source.push("subnet-ffff".to_owned());
    source.reverse();
    prop_assert_eq!(config.subnets(), Some(subnets.as_slice()));
  }

  #[test]
  fn list_builder_appends(
    first in proptest::collection::vec("[a-z]{1,4}", 0..4),
    second in proptest::collection::vec("[a-z]{1,4}", 0..4),
  ) {
    let config = VpcConfig::default()
      .with_security_group_ids(first.clone())
      .with_security_group_ids(second.clone());
    let expected: Vec<String> = first.into_iter().chain(second).collect();
    prop_assert_eq!(config.security_group_ids(), Some(expected.as_slice()));
  }

  #[test]
  fn enum_lookup_is_case_sensitive(index in 0..InstanceType::VALUES.len()) {
    let value = InstanceType::VALUES[index];
    let upper = value.as_str().to_uppercase();
    prop_assert!(InstanceType::from_value(&upper).is_err());
    prop_assert_eq!(InstanceType::from_value(value.as_str()), Ok(value));
  }

  #[test]
  fn unknown_status_strings_are_rejected(value in "[A-Za-z]{1,12}") {
    let known = TrainingJobStatus::DESCRIPTOR.contains(&value);
    prop_assert_eq!(TrainingJobStatus::from_value(&value).is_ok(), known);
  }
}
