//! `sagemodel`: inspect the SageMaker data model and its JSON encoding.
//!
//! # Usage
//!
//! ```text
//! sagemodel enums InstanceType
//! sagemodel lookup TrainingJobStatus InProgress
//! sagemodel describe TrainingJob
//! sagemodel fields CreateTrainingJob --response
//! sagemodel render DescribeNotebookInstance --response response.json
//! sagemodel marshal StopTrainingJob - < request.json
//! ```
//!
//! Codec settings come from `sagemodel.toml` (or `--config`), overridden by
//! `SAGEMODEL_*` environment variables.

mod commands;

use std::{
  io::{self, Read as _},
  path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sagemodel_json::{CodecConfig, Direction};
use sagemodel_types::Operation;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "SageMaker data model inspector")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "sagemodel.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List enumerations, or the values of one enumeration.
  Enums { name: Option<String> },

  /// Resolve a wire-string against an enumeration.
  Lookup { enumeration: String, value: String },

  /// Print the fields of a record type.
  Describe { record: String },

  /// Print the fields of an operation's request or response.
  Fields {
    operation: Operation,
    #[arg(long)]
    response:  bool,
  },

  /// Decode a JSON payload and print its debug form.
  Render {
    operation: Operation,
    #[arg(long)]
    response:  bool,
    /// JSON file, or `-` for stdin.
    input:     PathBuf,
  },

  /// Build the request envelope for a JSON request body.
  Marshal {
    operation: Operation,
    /// JSON file, or `-` for stdin.
    input:     PathBuf,
  },
}

fn direction(response: bool) -> Direction {
  if response {
    Direction::Response
  } else {
    Direction::Request
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();

  let output = match cli.command {
    Command::Enums { name } => commands::enums(name.as_deref())?,
    Command::Lookup { enumeration, value } => {
      commands::lookup(&enumeration, &value)?
    }
    Command::Describe { record } => commands::describe(&record)?,
    Command::Fields {
      operation,
      response,
    } => commands::fields(operation, direction(response))?,
    Command::Render {
      operation,
      response,
      input,
    } => commands::render(operation, direction(response), &read_input(&input)?)?,
    Command::Marshal { operation, input } => {
      let config = load_config(&cli.config)?;
      commands::marshal(operation, &read_input(&input)?, &config)?
    }
  };

  print!("{output}");
  Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<CodecConfig> {
  let settings = config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("SAGEMODEL"))
    .build()
    .context("failed to read config file")?;

  let config: CodecConfig = settings
    .try_deserialize()
    .context("failed to deserialise CodecConfig")?;
  tracing::debug!(?config, "loaded codec config");
  Ok(config)
}

/// Reads a file, or all of stdin when the path is `-`.
fn read_input(path: &Path) -> anyhow::Result<String> {
  if path == Path::new("-") {
    let mut body = String::new();
    io::stdin()
      .read_to_string(&mut body)
      .context("failed to read stdin")?;
    return Ok(body);
  }
  std::fs::read_to_string(path)
    .with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
  }

  #[test]
  fn operation_arguments_are_validated() {
    let cli = Cli::try_parse_from([
      "sagemodel",
      "fields",
      "CreateTrainingJob",
      "--response",
    ])
    .unwrap();
    assert!(matches!(
      cli.command,
      Command::Fields {
        operation: Operation::CreateTrainingJob,
        response:  true,
      }
    ));
    assert_eq!(cli.config, PathBuf::from("sagemodel.toml"));

    assert!(
      Cli::try_parse_from(["sagemodel", "fields", "DescribeTrainingJob"])
        .is_err()
    );
  }

  #[test]
  fn missing_config_file_yields_defaults() {
    let config = load_config(Path::new("does-not-exist.toml")).unwrap();
    assert_eq!(config, CodecConfig::default());
  }
}
