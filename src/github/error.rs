//! Error types surfaced by the exporter.

use thiserror::Error;

/// Errors surfaced while configuring, fetching, or writing an export.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The authentication token was missing.
    #[error("personal access token is required (use --token or GITHUB_TOKEN)")]
    MissingToken,

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// The requested record kind is not supported in repository mode.
    #[error("unsupported kind: {kind}")]
    UnsupportedKind {
        /// The kind string supplied on the command line.
        kind: String,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// The API returned a rate limit error.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Error message from GitHub.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Writing the export failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ExportError {
    /// Wraps an I/O failure with a short description of the operation.
    #[must_use]
    pub fn io(operation: &str, error: &std::io::Error) -> Self {
        Self::Io {
            message: format!("{operation}: {error}"),
        }
    }
}
