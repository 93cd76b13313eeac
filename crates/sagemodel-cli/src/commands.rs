//! Subcommand bodies. Each returns the text to print so it can be tested
//! without a terminal.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use sagemodel_core::record::RecordDescriptor;
use sagemodel_json::{CodecConfig, Direction, Envelope};
use sagemodel_types::{Operation, catalog};

// ─── Catalog ──────────────────────────────────────────────────────────────────

/// Without a name, one line per enumeration with its value count. With a
/// name, that enumeration's wire values in declaration order.
pub fn enums(name: Option<&str>) -> Result<String> {
  let mut out = String::new();
  match name {
    Some(name) => {
      let descriptor = catalog::enumeration(name)?;
      for value in descriptor.wire_values {
        writeln!(out, "{value}")?;
      }
    }
    None => {
      for descriptor in catalog::ENUMERATIONS {
        writeln!(
          out,
          "{:<40} {}",
          descriptor.name,
          descriptor.wire_values.len()
        )?;
      }
    }
  }
  Ok(out)
}

/// Canonical wire-string for `value`, or an error naming the enumeration.
pub fn lookup(enumeration: &str, value: &str) -> Result<String> {
  let resolved = catalog::lookup(enumeration, value)?;
  Ok(format!("{resolved}\n"))
}

pub fn describe(record: &str) -> Result<String> {
  field_table(catalog::record(record)?)
}

pub fn fields(operation: Operation, direction: Direction) -> Result<String> {
  field_table(&sagemodel_json::descriptor(operation, direction))
}

fn field_table(descriptor: &RecordDescriptor) -> Result<String> {
  let mut out = String::new();
  writeln!(out, "{}", descriptor.name)?;
  let width = descriptor
    .fields
    .iter()
    .map(|field| field.wire_name.len())
    .max()
    .unwrap_or(0);
  for field in descriptor.fields {
    writeln!(
      out,
      "  {:<width$}  {}",
      field.wire_name,
      field.type_label()
    )?;
  }
  Ok(out)
}

// ─── Codec ────────────────────────────────────────────────────────────────────

pub fn render(
  operation: Operation,
  direction: Direction,
  body: &str,
) -> Result<String> {
  let rendered = sagemodel_json::render(operation, direction, body)
    .with_context(|| format!("failed to decode {operation} {direction}"))?;
  Ok(format!("{rendered}\n"))
}

/// Header lines followed by a blank line and the body.
pub fn marshal(
  operation: Operation,
  body: &str,
  config: &CodecConfig,
) -> Result<String> {
  let Envelope {
    target,
    content_type,
    body,
  } = sagemodel_json::marshal_json(operation, body, config)
    .with_context(|| format!("failed to decode {operation} request"))?;
  Ok(format!(
    "X-Amz-Target: {target}\nContent-Type: {content_type}\n\n{body}\n"
  ))
}
