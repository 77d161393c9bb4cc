//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.github-exporter.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `GITHUB_EXPORTER_*`, or legacy
//!    `GITHUB_TOKEN` for the token
//! 4. **Command-line arguments** – `--output`, `--token`, `--format`,
//!    `--kind`, `--mode`, `--api-url`
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! format = "csv"
//! kind = "releases"
//! output = "exports/github-export.json"
//! ```

use std::env;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::export::{OutputFormat, RecordKind};
use crate::fetch::FetchMode;
use crate::github::{ApiBase, DEFAULT_API_BASE, ExportError, PersonalAccessToken};

/// Base path used when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "github-export.json";

/// Record kind used when `--kind` is not given.
pub const DEFAULT_KIND: &str = "commits";

/// Legacy environment variable still honoured for the token.
const LEGACY_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Exporter configuration supporting CLI, environment, and file sources.
///
/// Every field is optional; accessors apply the defaults.
///
/// # Example
///
/// ```no_run
/// use github_exporter::ExporterConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ExporterConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GITHUB_EXPORTER",
    discovery(
        dotfile_name = ".github-exporter.toml",
        config_file_name = "github-exporter.toml",
        app_name = "github-exporter"
    )
)]
pub struct ExporterConfig {
    /// Base output path. Only its directory is kept; the filename is
    /// derived from the kind, the date, and the format.
    ///
    /// Can be provided via:
    /// - CLI: `--output <PATH>` or `-o <PATH>`
    /// - Environment: `GITHUB_EXPORTER_OUTPUT`
    /// - Config file: `output = "..."`
    #[ortho_config(cli_short = 'o')]
    pub output: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `GITHUB_EXPORTER_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Output format: `json`, `csv`, or anything else for a stdout table.
    #[ortho_config(cli_short = 'f')]
    pub format: Option<String>,

    /// Record kind: `commits`, `pull_requests`, `issues`, `releases`, or
    /// `watch`.
    #[ortho_config(cli_short = 'k')]
    pub kind: Option<String>,

    /// Fetch mode: `events` walks the event feed; anything else walks the
    /// owned repositories.
    #[ortho_config(cli_short = 'm')]
    pub mode: Option<String>,

    /// REST API base, for GitHub Enterprise or a local test server.
    #[ortho_config(cli_short = 'a')]
    pub api_url: Option<String>,
}

impl ExporterConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, ExportError> {
        let raw = self
            .token
            .clone()
            .or_else(|| env::var(LEGACY_TOKEN_VAR).ok())
            .ok_or(ExportError::MissingToken)?;
        PersonalAccessToken::new(raw)
    }

    /// Base output path, defaulting to `github-export.json`.
    #[must_use]
    pub fn output_path(&self) -> &Utf8Path {
        Utf8Path::new(self.output.as_deref().unwrap_or(DEFAULT_OUTPUT))
    }

    /// Selected output format; unset means the stdout table.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_flag(self.format.as_deref().unwrap_or_default())
    }

    /// Raw kind string, defaulting to `commits`.
    #[must_use]
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_KIND)
    }

    /// Parsed kind; `None` for names no writer recognises.
    #[must_use]
    pub fn record_kind(&self) -> Option<RecordKind> {
        RecordKind::parse(self.kind())
    }

    /// Selected fetch strategy.
    #[must_use]
    pub fn fetch_mode(&self) -> FetchMode {
        FetchMode::from_flag(self.mode.as_deref().unwrap_or_default())
    }

    /// Parsed API base, defaulting to the public GitHub endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidUrl`] when the value is not an absolute
    /// URI.
    pub fn api_base(&self) -> Result<ApiBase, ExportError> {
        ApiBase::parse(self.api_url.as_deref().unwrap_or(DEFAULT_API_BASE))
    }
}
