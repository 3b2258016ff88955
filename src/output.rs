//! CI output sinks.
//!
//! Values are written verbatim. A value containing a newline corrupts the
//! `name=value` line format; it is logged, not escaped.
use crate::error::ActionError;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Destination for named step outputs.
pub trait OutputSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), ActionError>;
}

/// Appends `name=value` lines to the file named by `GITHUB_OUTPUT`.
#[derive(Debug, Clone)]
pub struct FileOutput {
    path: PathBuf,
}

impl FileOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for FileOutput {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), ActionError> {
        warn_on_newline(name, value);
        let write_error = |source| ActionError::OutputWrite {
            name: name.to_string(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_error)?;
        writeln!(file, "{name}={value}").map_err(write_error)?;
        if let Err(err) = file.sync_all() {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to sync output file"
            );
        }
        tracing::debug!(name, "set output");
        Ok(())
    }
}

/// Emits the legacy `::set-output` workflow command to a writer.
pub struct CommandOutput<W: Write> {
    writer: W,
}

impl CommandOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CommandOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for CommandOutput<W> {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), ActionError> {
        warn_on_newline(name, value);
        writeln!(self.writer, "::set-output name={name}::{value}")
            .and_then(|()| self.writer.flush())
            .map_err(|source| ActionError::OutputWrite {
                name: name.to_string(),
                source,
            })
    }
}

fn warn_on_newline(name: &str, value: &str) {
    if value.contains('\n') {
        tracing::warn!(name, "output value contains a newline and will span lines");
    }
}
