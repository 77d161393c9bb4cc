//! Shared test utilities for running the exporter binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Environment variables cleared so runs are hermetic even if the developer
/// has exporter variables set.
const EXPORTER_VARIABLES: [&str; 7] = [
    "GITHUB_EXPORTER_OUTPUT",
    "GITHUB_EXPORTER_TOKEN",
    "GITHUB_EXPORTER_FORMAT",
    "GITHUB_EXPORTER_KIND",
    "GITHUB_EXPORTER_MODE",
    "GITHUB_EXPORTER_API_URL",
    "GITHUB_TOKEN",
];

/// Creates a temporary directory for a test run.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// Returns the path to the built binary.
pub fn binary_path() -> PathBuf {
    // cargo test builds binaries in target/debug
    let mut path = std::env::current_exe()
        .unwrap_or_else(|error| panic!("failed to get current exe path: {error}"));
    path.pop(); // remove test binary name
    path.pop(); // remove deps
    path.push("github-exporter");
    path
}

/// Runs the binary inside `workdir`, which also stands in for the home and
/// XDG config directories so no stray configuration file is discovered.
pub fn run_exporter(workdir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(binary_path());
    command
        .args(args)
        .current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir)
        .env("RUST_LOG", "off");

    for variable in EXPORTER_VARIABLES {
        command.env_remove(variable);
    }
    for (key, value) in env {
        command.env(key, value);
    }

    command
        .output()
        .unwrap_or_else(|error| panic!("failed to execute binary: {error}"))
}

/// Stdout of a finished run as text.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Files in `dir` whose names start with `prefix`.
pub fn files_with_prefix(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    let entries = std::fs::read_dir(dir)
        .unwrap_or_else(|error| panic!("failed to list {}: {error}", dir.display()));
    let mut matches: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(prefix))
        })
        .collect();
    matches.sort();
    matches
}
