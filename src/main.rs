//! github-exporter CLI entrypoint.

mod cli;

use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

use github_exporter::logging::init_logging;
use github_exporter::{ExportError, ExporterConfig, OutputTarget};
use ortho_config::OrthoConfig;

use cli::args::informational_request;
use cli::output::{exit_code, write_outcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    let arguments: Vec<OsString> = env::args_os().collect();
    if let Some(request) = informational_request(&arguments) {
        // Help and version go to stdout and are not failures.
        if request.print().is_err() {
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let outcome = run(arguments).await;
    if write_outcome(&outcome).is_err() {
        return ExitCode::FAILURE;
    }
    exit_code(&outcome)
}

async fn run(arguments: Vec<OsString>) -> Result<OutputTarget, ExportError> {
    let config = load_config(arguments)?;
    cli::export_activity::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ExportError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config(arguments: Vec<OsString>) -> Result<ExporterConfig, ExportError> {
    ExporterConfig::load_from_iter(arguments).map_err(|error| ExportError::Configuration {
        message: error.to_string(),
    })
}
