// ============================================================
// ROSTER READER
// ============================================================
// Read the roster file as text with encoding fallback

use std::fs;
use std::path::Path;

use crate::domain::error::{AppError, Result};

/// Read a roster file into a string.
///
/// UTF-8 is tried first; anything else is decoded as Windows-1252, the
/// usual encoding of spreadsheet exports. An unreadable path is the one
/// hard failure of the pipeline.
pub fn read_roster(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(err) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(err.as_bytes());
            Ok(decoded.into_owned())
        }
    }
}
