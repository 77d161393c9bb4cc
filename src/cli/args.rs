//! Command-line surface shown by `--help` and `--version`.
//!
//! Values are loaded by [`github_exporter::ExporterConfig`]; this command
//! only describes the same flags so help output carries descriptions.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Arg, Command};

/// Builds the command describing every exporter flag.
#[must_use]
pub fn command() -> Command {
    Command::new("github-exporter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export your GitHub activity to a file")
        .long_about(
            "Export your GitHub activity to a file.\n\n\
             Every option can also be set through a GITHUB_EXPORTER_* \
             environment variable or a .github-exporter.toml file.",
        )
        .arg(option(
            "output",
            'o',
            "PATH",
            "Output file path; its directory is kept and the file is named \
             github-<kind>-export-<YYYYMMDD>.<ext> [default: github-export.json]",
        ))
        .arg(option(
            "token",
            't',
            "TOKEN",
            "GitHub API access token; falls back to GITHUB_TOKEN",
        ))
        .arg(option(
            "format",
            'f',
            "FORMAT",
            "Output format (json, csv); anything else prints a table",
        ))
        .arg(option(
            "kind",
            'k',
            "KIND",
            "Kind of data to export (commits, pull_requests, issues, releases, watch) \
             [default: commits]",
        ))
        .arg(option(
            "mode",
            'm',
            "MODE",
            "Set to `events` to use the GitHub events API",
        ))
        .arg(option(
            "api-url",
            'a',
            "URL",
            "REST API base URL [default: https://api.github.com]",
        ))
        .arg(
            Arg::new("config-path")
                .long("config-path")
                .value_name("PATH")
                .hide(true),
        )
}

fn option(name: &'static str, short: char, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .short(short)
        .value_name(value_name)
        .help(help)
}

/// Returns the help or version display requested by `args`, if any.
///
/// Every other outcome, including malformed arguments, is left to the
/// configuration loader.
#[must_use]
pub fn informational_request<I, T>(args: I) -> Option<clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match command().try_get_matches_from(args) {
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Some(error)
        }
        _ => None,
    }
}
