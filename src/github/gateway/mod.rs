//! Gateways for loading user activity through Octocrab.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod octocrab_gateway;

pub use octocrab_gateway::OctocrabActivityGateway;

use async_trait::async_trait;
use http::Uri;

use crate::github::error::ExportError;
use crate::github::models::{
    ActivityEvent, CommitSummary, IssueSummary, OwnedRepository, PullRequestSummary,
    ReleaseSummary,
};

/// Page size requested from every listing endpoint.
pub const PER_PAGE: u8 = 100;

/// Position in the paginated event feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    /// The first page of the feed.
    Start,
    /// A page addressed by the `next` link of the previous response.
    Next(Uri),
}

/// One page of the user's event feed.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPage {
    /// Events on this page in feed order.
    pub events: Vec<ActivityEvent>,
    /// Link to the following page, absent on the last page.
    pub next: Option<Uri>,
}

/// Gateway exposing the GitHub calls needed to export user activity.
///
/// Repository listings return every page; the event feed is paged by the
/// caller so fetch errors can abort between pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityGateway: Send + Sync {
    /// Resolve the login of the authenticated user.
    async fn authenticated_login(&self) -> Result<String, ExportError>;

    /// List repositories owned by the authenticated user.
    async fn owned_repositories(&self) -> Result<Vec<OwnedRepository>, ExportError>;

    /// List commits in the repository authored by `author`.
    async fn list_commits(
        &self,
        repository: &OwnedRepository,
        author: &str,
    ) -> Result<Vec<CommitSummary>, ExportError>;

    /// List pull requests in the repository.
    async fn list_pull_requests(
        &self,
        repository: &OwnedRepository,
    ) -> Result<Vec<PullRequestSummary>, ExportError>;

    /// List issues in the repository, including pull-request-backed entries.
    async fn list_issues(
        &self,
        repository: &OwnedRepository,
    ) -> Result<Vec<IssueSummary>, ExportError>;

    /// List releases in the repository.
    async fn list_releases(
        &self,
        repository: &OwnedRepository,
    ) -> Result<Vec<ReleaseSummary>, ExportError>;

    /// Fetch one page of events performed by `login`.
    async fn performed_events(
        &self,
        login: &str,
        cursor: &PageCursor,
    ) -> Result<EventPage, ExportError>;
}
