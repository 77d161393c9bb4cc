//! Credential and endpoint wrappers for the GitHub client.

use http::Uri;

use super::error::ExportError;

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ExportError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExportError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

// Keeps the secret out of logs and error output.
impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PersonalAccessToken(***)")
    }
}

/// Validated REST API base URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Uri);

impl ApiBase {
    /// Parses an API base such as `https://api.github.com` or
    /// `https://ghe.example.com/api/v3`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidUrl` when the value is not an absolute URI.
    pub fn parse(input: &str) -> Result<Self, ExportError> {
        let uri = input
            .trim()
            .parse::<Uri>()
            .map_err(|error| ExportError::InvalidUrl(error.to_string()))?;
        if uri.scheme().is_none() || uri.host().is_none() {
            return Err(ExportError::InvalidUrl(format!(
                "'{input}' must include a scheme and host"
            )));
        }
        Ok(Self(uri))
    }

    /// Borrow the parsed URI.
    #[must_use]
    pub const fn as_uri(&self) -> &Uri {
        &self.0
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(Uri::from_static(DEFAULT_API_BASE))
    }
}
