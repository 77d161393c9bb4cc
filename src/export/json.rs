//! JSON formatter for the full export.

use std::io::Write;

use crate::github::ExportError;

use super::model::Export;

/// Writes the whole export as pretty-printed JSON (two-space indent).
///
/// All five collections are always written, whichever kind was requested;
/// empty collections appear as `[]`.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if serialization or writing fails.
pub fn write_json<W: Write>(writer: &mut W, export: &Export) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, export).map_err(|e| ExportError::Io {
        message: format!("JSON serialization failed: {e}"),
    })
}
