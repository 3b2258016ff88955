//! CI action step: text, number, file, and API reachability outputs.
//!
//! The binary reads the process environment once and hands explicit values
//! to [`workflow::run_action`].

pub mod cli;
pub mod config;
pub mod error;
pub mod file;
pub mod numbers;
pub mod output;
pub mod probe;
pub mod text;
pub mod workflow;

pub use config::{load_config, ActionConfig, DEFAULT_CONFIG_PATH};
pub use error::{ActionError, ConfigError, Stage, StageFailure, UnreachableError};
pub use output::{CommandOutput, FileOutput, OutputSink};
pub use probe::{check_reachable, ProbeOptions, ProbeOutcome};
pub use workflow::{run_action, RunReport};
