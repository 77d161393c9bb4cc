//! Octocrab client construction for the activity gateway.

use octocrab::Octocrab;

use crate::github::error::ExportError;
use crate::github::token::{ApiBase, PersonalAccessToken};

use super::error_mapping::map_octocrab_error;

/// Builds an authenticated Octocrab client against the given API base.
///
/// # Errors
///
/// Returns `ExportError::InvalidUrl` when Octocrab rejects the base URI or
/// `ExportError::Api` when the client cannot be constructed.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &ApiBase,
) -> Result<Octocrab, ExportError> {
    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(api_base.as_uri().clone())
        .map_err(|error| ExportError::InvalidUrl(format!("base URI rejected: {error}")))?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
