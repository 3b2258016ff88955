//! Error types for the action pipeline.
//!
//! Every stage returns one of these; nothing is recovered locally. Messages
//! describe one level only; causes are reachable through `source()`.
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or validating the action configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode TOML file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Failures of the reachability probe.
#[derive(Error, Debug)]
pub enum UnreachableError {
    #[error("API is not reachable, status code: {status}")]
    Status { status: u16 },

    #[error("API request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u128 },

    #[error("API check exceeded the {deadline_ms}ms deadline")]
    DeadlineExceeded { deadline_ms: u128 },

    #[error("failed to make API request")]
    Transport(#[source] ureq::Error),

    #[error("unusable API response: {0}")]
    Response(String),
}

/// Any failure raised by a pipeline stage.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("failed to read input file {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output file {}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output {name}")]
    OutputWrite {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Unreachable(#[from] UnreachableError),
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Text,
    Numbers,
    File,
    Api,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Text => "text processing",
            Stage::Numbers => "number processing",
            Stage::File => "file processing",
            Stage::Api => "API check",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An [`ActionError`] tagged with the stage that raised it.
#[derive(Error, Debug)]
#[error("{stage} error")]
pub struct StageFailure {
    pub stage: Stage,
    #[source]
    pub source: ActionError,
}

impl StageFailure {
    pub(crate) fn new(stage: Stage, source: impl Into<ActionError>) -> Self {
        Self {
            stage,
            source: source.into(),
        }
    }
}
