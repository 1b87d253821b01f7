//! Reading diagram sources and writing rendered output.

use crate::error::{IoError, Result};
use std::path::Path;

/// UTF-8 byte-order mark, stripped from sources saved by some editors.
const UTF8_BOM: char = '\u{feff}';

/// Maximum source size accepted (8MB). The hex fallback doubles it into a
/// URL, so anything larger has no chance of being rendered.
const MAX_SOURCE_SIZE: u64 = 8 * 1024 * 1024;

/// Reads a diagram source as UTF-8, dropping a leading byte-order mark.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, is too
/// large, or is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use pumlrender::io::read_source;
///
/// let source = read_source("docs/diagram.puml").unwrap();
/// ```
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if !path_ref.exists() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }

    let size = std::fs::metadata(path_ref)
        .map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?
        .len();

    if size > MAX_SOURCE_SIZE {
        return Err(IoError::ReadFailed {
            path: path_str,
            reason: format!("file too large: {size} bytes (max: {MAX_SOURCE_SIZE} bytes)"),
        }
        .into());
    }

    let bytes = std::fs::read(path_ref).map_err(|e| IoError::ReadFailed {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;

    let text = String::from_utf8(bytes).map_err(|e| IoError::ReadFailed {
        path: path_str,
        reason: format!("invalid UTF-8: {e}"),
    })?;

    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Writes rendered bytes, creating parent directories and replacing any
/// existing file.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_output<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path_ref, bytes).map_err(|e| IoError::WriteFailed {
        path: path_str,
        reason: e.to_string(),
    })?;

    tracing::debug!(path = %path_ref.display(), bytes = bytes.len(), "output written");
    Ok(())
}
