//! Output destination resolution and the final write.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;

use crate::github::ExportError;

use super::csv::write_csv;
use super::json::write_json;
use super::model::{Export, OutputFormat, RecordKind};
use super::table::write_table;

/// Where an export ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A file derived from the `--output` base path.
    File(Utf8PathBuf),
    /// Standard output.
    Stdout,
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{path}"),
            Self::Stdout => f.write_str("stdout"),
        }
    }
}

/// Derives the destination for `format`.
///
/// File formats keep the directory of `base` (everything up to and
/// including its last `/`) and replace the filename with
/// `github-<kind>-export-<YYYYMMDD>.<ext>`. The filename of `base` is
/// ignored. The table format always goes to stdout.
#[must_use]
pub fn resolve_output_target(
    base: &Utf8Path,
    kind: &str,
    format: OutputFormat,
    date: NaiveDate,
) -> OutputTarget {
    let Some(extension) = format.extension() else {
        return OutputTarget::Stdout;
    };

    let filename = format!(
        "github-{kind}-export-{}.{extension}",
        date.format("%Y%m%d")
    );
    let path = match base.as_str().rsplit_once('/') {
        Some((directory, _)) => format!("{directory}/{filename}"),
        None => filename,
    };
    OutputTarget::File(Utf8PathBuf::from(path))
}

/// Writes `export` to `target` in `format`.
///
/// File output is buffered and flushed before returning, so a successful
/// return means every byte reached the file. `open_console` is only called
/// for [`OutputTarget::Stdout`].
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created, or if
/// writing or flushing fails.
pub fn write_export<W, C>(
    target: &OutputTarget,
    format: OutputFormat,
    export: &Export,
    kind: Option<RecordKind>,
    open_console: C,
) -> Result<(), ExportError>
where
    W: Write,
    C: FnOnce() -> W,
{
    match target {
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|e| ExportError::Io {
                message: format!("failed to create output file '{path}': {e}"),
            })?;
            let mut writer = BufWriter::new(file);
            write_format(&mut writer, format, export, kind)?;
            writer
                .flush()
                .map_err(|e| ExportError::io("failed to flush output file", &e))
        }
        OutputTarget::Stdout => {
            let mut console = open_console();
            write_format(&mut console, format, export, kind)
        }
    }
}

/// Dispatches to the writer for `format`.
///
/// # Errors
///
/// Propagates the selected writer's [`ExportError::Io`].
pub fn write_format<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    export: &Export,
    kind: Option<RecordKind>,
) -> Result<(), ExportError> {
    match format {
        OutputFormat::Json => write_json(writer, export),
        OutputFormat::Csv => write_csv(writer, export, kind),
        OutputFormat::Table => write_table(writer, export, kind),
    }
}
