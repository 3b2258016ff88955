//! Read-append-write of the configured input file.
use crate::error::ActionError;
use std::fs;
use std::path::Path;

/// Write `input contents + "\n" + text` to `output`, replacing it.
///
/// `input` is read in full before `output` is opened, so the two may be the
/// same path.
pub fn append_to_file(input: &Path, output: &Path, text: &str) -> Result<(), ActionError> {
    let mut contents = fs::read(input).map_err(|source| ActionError::FileRead {
        path: input.to_path_buf(),
        source,
    })?;
    let original_bytes = contents.len();
    contents.push(b'\n');
    contents.extend_from_slice(text.as_bytes());
    fs::write(output, &contents).map_err(|source| ActionError::FileWrite {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        original_bytes,
        written_bytes = contents.len(),
        "appended text to file"
    );
    Ok(())
}
