//! The record contract and its descriptors.

use std::{fmt, hash::Hash};

use sagemodel_macros::Record;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{float::FloatCheck, wire_enum::EnumDescriptor};

// ─── Traits ──────────────────────────────────────────────────────────────────

/// A plain data-holder with optional fields, generated by `#[derive(Record)]`.
///
/// `Display` renders the debug form (`{Name: foo,Status: InService}`), and
/// equality and hashing are structural over every field.
pub trait Record:
  Clone
  + Default
  + Eq
  + Hash
  + fmt::Debug
  + fmt::Display
  + Serialize
  + DeserializeOwned
  + Send
  + Sync
  + FloatCheck
  + 'static
{
  const DESCRIPTOR: RecordDescriptor;

  /// True when no field has been set.
  fn is_unset(&self) -> bool;
}

/// A record that is the payload of one named API operation.
pub trait Request: Record {
  /// Operation name as sent to the service, e.g. `"CreateTrainingJob"`.
  const OPERATION: &'static str;

  type Response: Record;
}

// ─── Descriptors ─────────────────────────────────────────────────────────────

/// Value type of a field, ignoring whether it is a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldShape {
  String,
  Integer,
  Long,
  Boolean,
  Float,
  Timestamp,
  /// String-to-string map.
  Map,
  /// Nested record, by type name.
  Record(&'static str),
}

impl FieldShape {
  pub fn type_name(&self) -> &'static str {
    match self {
      Self::String => "String",
      Self::Integer => "Integer",
      Self::Long => "Long",
      Self::Boolean => "Boolean",
      Self::Float => "Float",
      Self::Timestamp => "Timestamp",
      Self::Map => "Map",
      Self::Record(name) => name,
    }
  }
}

impl fmt::Display for FieldShape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.type_name())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
  /// Rust field name.
  pub name:        &'static str,
  /// Member name on the wire.
  pub wire_name:   &'static str,
  pub shape:       FieldShape,
  pub list:        bool,
  /// Set for string fields that hold an enumeration's wire-string.
  pub enumeration: Option<&'static EnumDescriptor>,
}

impl FieldInfo {
  /// Human-readable type, e.g. `List<Channel>` or `TrainingJobStatus`.
  pub fn type_label(&self) -> String {
    let element = match self.enumeration {
      Some(enumeration) => enumeration.name,
      None => self.shape.type_name(),
    };
    if self.list {
      format!("List<{element}>")
    } else {
      element.to_owned()
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordDescriptor {
  pub name:   &'static str,
  pub fields: &'static [FieldInfo],
}

impl RecordDescriptor {
  /// Finds a field by its wire name.
  pub fn field(&self, wire_name: &str) -> Option<&'static FieldInfo> {
    self.fields.iter().find(|field| field.wire_name == wire_name)
  }

  /// Type names of the records nested directly inside this one.
  pub fn nested_records(&self) -> impl Iterator<Item = &'static str> {
    self.fields.iter().filter_map(|field| match field.shape {
      FieldShape::Record(name) => Some(name),
      _ => None,
    })
  }
}

// ─── Empty payload ───────────────────────────────────────────────────────────

/// Response of operations that return no payload.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Record,
)]
pub struct EmptyResult {}
