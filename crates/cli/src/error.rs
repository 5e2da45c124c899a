//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: core error (bad config, bad random range)
//! - 11: I/O error (reading the config file)
//! - 12: input error (a channel value failed validation, unknown channel)
//! - 13: serialization error

use oklch_explorer_core::{ExplorerError, ValidationError};
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A core error outside channel validation.
    Core(ExplorerError),
    /// Reading an input file failed.
    Io(String),
    /// One or more channel values were rejected.
    Input(Vec<ValidationError>),
    /// Bad user input outside channel validation (e.g. unknown channel name).
    Usage(String),
    /// JSON output failed.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) | CliError::Usage(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }

    /// JSON form for `--json` mode.
    pub fn to_json(&self) -> serde_json::Value {
        let mut j = serde_json::json!({
            "error": self.to_string(),
            "exit_code": self.exit_code(),
        });
        if let CliError::Input(errors) = self {
            j["validation"] = serde_json::to_value(errors).unwrap_or_default();
        }
        j
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Core(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(errors) => {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "{}", messages.join("; "))
            }
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ExplorerError> for CliError {
    fn from(e: ExplorerError) -> Self {
        match e {
            ExplorerError::Validation(v) => CliError::Input(vec![v]),
            ExplorerError::UnknownChannel(_) => CliError::Usage(e.to_string()),
            other => CliError::Core(other),
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        CliError::Input(vec![e])
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
