//! Data models for the GitHub REST responses used by the exporter.
//!
//! `Api*` types mirror the JSON payloads and stay private to the gateway.
//! The public summaries carry only the fields the fetchers flatten into
//! export records.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Repository owned by the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRepository {
    /// Login of the repository owner.
    pub owner: String,
    /// Repository name without the owner prefix.
    pub name: String,
}

impl OwnedRepository {
    /// Creates a repository reference from owner and name.
    #[must_use]
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_owned(),
            name: name.to_owned(),
        }
    }

    pub(crate) fn path(&self, resource: &str) -> String {
        format!("/repos/{}/{}/{resource}", self.owner, self.name)
    }
}

/// Commit listed for a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// Commit SHA.
    pub sha: String,
    /// Full commit message.
    pub message: String,
    /// Git author name.
    pub author: Option<String>,
    /// Git author timestamp.
    pub authored_at: DateTime<Utc>,
}

/// Pull request listed for a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// Pull request number.
    pub number: u64,
    /// Pull request title.
    pub title: Option<String>,
    /// State such as `open` or `closed`.
    pub state: Option<String>,
    /// Author login.
    pub author: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Issue listed for a repository.
///
/// The issues endpoint also returns pull requests; those carry a
/// `pull_request` link and are flagged by [`IssueSummary::is_pull_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
    /// Issue number.
    pub number: u64,
    /// Issue title.
    pub title: Option<String>,
    /// State such as `open` or `closed`.
    pub state: Option<String>,
    /// Author login.
    pub author: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Whether the entry is backed by a pull request.
    pub is_pull_request: bool,
}

impl IssueSummary {
    /// Returns true when the issue is a pull request in disguise.
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.is_pull_request
    }
}

/// Release listed for a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSummary {
    /// Git tag the release points at.
    pub tag_name: String,
    /// Display name of the release.
    pub name: Option<String>,
    /// Login of the user who published the release.
    pub author: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Entry from the user's activity event feed.
///
/// The payload is kept as raw JSON; decoding it is the caller's concern so a
/// malformed payload only affects its own event.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEvent {
    /// Event type tag such as `PushEvent`.
    pub event_type: String,
    /// Login of the user who performed the event.
    pub actor: Option<String>,
    /// Full repository name (`owner/name`).
    pub repository: String,
    /// Untyped event payload.
    pub payload: serde_json::Value,
    /// Event creation timestamp.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) name: String,
    pub(crate) owner: ApiUser,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiCommit {
    pub(crate) sha: String,
    pub(crate) commit: ApiCommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiCommitDetail {
    pub(crate) message: String,
    pub(crate) author: ApiSignature,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiSignature {
    pub(crate) name: Option<String>,
    pub(crate) date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub(crate) number: u64,
    pub(crate) title: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) user: Option<ApiUser>,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiIssue {
    pub(crate) number: u64,
    pub(crate) title: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) user: Option<ApiUser>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRelease {
    pub(crate) tag_name: String,
    pub(crate) name: Option<String>,
    pub(crate) author: Option<ApiUser>,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiEventRepository {
    pub(crate) name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiEvent {
    #[serde(rename = "type")]
    pub(crate) event_type: String,
    pub(crate) actor: Option<ApiUser>,
    pub(crate) repo: ApiEventRepository,
    #[serde(default)]
    pub(crate) payload: serde_json::Value,
    pub(crate) created_at: DateTime<Utc>,
}

fn login_of(user: Option<ApiUser>) -> Option<String> {
    user.and_then(|user| user.login)
}

impl From<ApiRepository> for OwnedRepository {
    fn from(value: ApiRepository) -> Self {
        Self {
            owner: value.owner.login.unwrap_or_default(),
            name: value.name,
        }
    }
}

impl From<ApiCommit> for CommitSummary {
    fn from(value: ApiCommit) -> Self {
        Self {
            sha: value.sha,
            message: value.commit.message,
            author: value.commit.author.name,
            authored_at: value.commit.author.date,
        }
    }
}

impl From<ApiPullRequest> for PullRequestSummary {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            title: value.title,
            state: value.state,
            author: login_of(value.user),
            created_at: value.created_at,
        }
    }
}

impl From<ApiIssue> for IssueSummary {
    fn from(value: ApiIssue) -> Self {
        Self {
            number: value.number,
            title: value.title,
            state: value.state,
            author: login_of(value.user),
            created_at: value.created_at,
            is_pull_request: value.pull_request.is_some_and(|link| !link.is_null()),
        }
    }
}

impl From<ApiRelease> for ReleaseSummary {
    fn from(value: ApiRelease) -> Self {
        Self {
            tag_name: value.tag_name,
            name: value.name,
            author: login_of(value.author),
            created_at: value.created_at,
        }
    }
}

impl From<ApiEvent> for ActivityEvent {
    fn from(value: ApiEvent) -> Self {
        Self {
            event_type: value.event_type,
            actor: login_of(value.actor),
            repository: value.repo.name,
            payload: value.payload,
            created_at: value.created_at,
        }
    }
}
