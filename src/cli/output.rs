//! Result-line formatting for CLI runs.

use std::io::{self, Write};
use std::process::ExitCode;

use github_exporter::{ExportError, OutputTarget};

/// Writes the final status line for a run to stdout.
///
/// # Errors
///
/// Returns the underlying I/O error if stdout cannot be written.
pub fn write_outcome(outcome: &Result<OutputTarget, ExportError>) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_outcome_to(&mut stdout, outcome)
}

/// Writes the final status line for a run to the given writer.
///
/// # Errors
///
/// Returns the underlying I/O error if the writer fails.
pub fn write_outcome_to<W: Write>(
    writer: &mut W,
    outcome: &Result<OutputTarget, ExportError>,
) -> io::Result<()> {
    match outcome {
        Ok(target) => writeln!(
            writer,
            "Export completed successfully. Output written to {target}"
        ),
        Err(error) => writeln!(writer, "Error: {error}"),
    }
}

/// Maps a run outcome to the process exit status.
pub const fn exit_code(outcome: &Result<OutputTarget, ExportError>) -> ExitCode {
    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
