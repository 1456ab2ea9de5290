//! Report file writer
//!
//! Persists a rendered report in full. Existing files are truncated and
//! replaced; there is no atomic rename or partial-write protection.

use crate::types::ReportError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Write `contents` to `path`, overwriting any existing file
///
/// # Returns
///
/// * `Ok(())` if the file was created and fully written
/// * `Err(ReportError::OutputCreate)` if the file could not be created
/// * `Err(ReportError::OutputWrite)` if writing or flushing failed
pub fn write_output(path: &Path, contents: &[u8]) -> Result<(), ReportError> {
    let path_str = path.display().to_string();

    let mut file = File::create(path).map_err(|e| ReportError::output_create(&path_str, e))?;

    file.write_all(contents)
        .and_then(|_| file.flush())
        .map_err(|e| ReportError::output_write(&path_str, e))?;

    debug!(path = %path_str, bytes = contents.len(), "wrote report");
    Ok(())
}
