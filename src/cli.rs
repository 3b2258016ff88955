//! Command-line arguments for the action step.
//!
//! Both paths fall back to the variables the CI host provides, so the action
//! can run with no arguments at all. The host sets unused inputs to an empty
//! string, so empty paths parse successfully and read as unset.
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "setup-my-action",
    version,
    about = "Process text, numbers, and a file, check an API, and publish step outputs"
)]
pub struct RootArgs {
    /// Path to the TOML config (empty means .github/configs/setup-my-action.toml)
    #[arg(
        long,
        value_name = "PATH",
        env = "INPUT_CONFIG_PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub config: Option<PathBuf>,

    /// Step output file written as name=value lines
    #[arg(
        long,
        value_name = "PATH",
        env = "GITHUB_OUTPUT",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub output: Option<PathBuf>,

    /// Print ::set-output workflow commands to stdout instead of using the output file
    #[arg(long)]
    pub legacy_set_output: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl RootArgs {
    /// Config path, or `None` when unset or empty.
    pub fn config_path(&self) -> Option<&Path> {
        non_empty(self.config.as_deref())
    }

    /// Output file path, or `None` when unset or empty.
    pub fn output_path(&self) -> Option<&Path> {
        non_empty(self.output.as_deref())
    }

    /// Log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|path| !path.as_os_str().is_empty())
}
