//! Rendered document output.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::IoError;

/// Write the rendered `document` to `path`, creating parent directories.
///
/// The file is replaced if it exists.
///
/// # Errors
///
/// Returns [`IoError::Io`] if a directory cannot be created or the file
/// cannot be written.
pub fn write_document(path: &Path, document: &str) -> Result<(), IoError> {
    let io_err = |e: std::io::Error| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, document).map_err(io_err)?;

    info!(path = %path.display(), n_bytes = document.len(), "document written");
    Ok(())
}

/// Write the rendered `document` to an open stream such as stdout.
///
/// # Errors
///
/// Returns [`IoError::Io`] if writing or flushing fails.
pub fn write_document_to<W: Write>(mut out: W, document: &str) -> Result<(), IoError> {
    let io_err = |e: std::io::Error| IoError::Io {
        path: "<stream>".into(),
        reason: e.to_string(),
    };
    out.write_all(document.as_bytes()).map_err(io_err)?;
    out.flush().map_err(io_err)
}
