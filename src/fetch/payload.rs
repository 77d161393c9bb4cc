//! Type-directed decoding of event payloads.
//!
//! The event feed carries an untyped `payload` whose shape depends on the
//! event's `type`. Only the fields the exporter flattens into records are
//! decoded; absent or `null` fields become empty strings or zero.

use serde::Deserialize;
use serde_json::Value;

/// A commit carried by a push event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushedCommit {
    /// Commit SHA.
    pub sha: String,
    /// Commit message.
    pub message: String,
}

/// Decoded payload of one activity event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    /// `PushEvent`: the commits pushed.
    Push {
        /// Pushed commits in push order.
        commits: Vec<PushedCommit>,
    },
    /// `PullRequestEvent`.
    PullRequest {
        /// Action such as `opened` or `closed`.
        action: String,
        /// Pull request number.
        number: u64,
        /// Pull request title.
        title: String,
    },
    /// `IssuesEvent`.
    Issues {
        /// Action such as `opened` or `closed`.
        action: String,
        /// Issue number.
        number: u64,
        /// Issue title.
        title: String,
    },
    /// `ReleaseEvent`.
    Release {
        /// Action such as `published`.
        action: String,
        /// Git tag of the release.
        tag_name: String,
        /// Release display name.
        name: String,
    },
    /// `WatchEvent`.
    Watch {
        /// Action, usually `started`.
        action: String,
    },
    /// Any event type the exporter does not record.
    Other,
}

impl EventPayload {
    /// Decodes `payload` according to `event_type`.
    ///
    /// Unknown event types decode to [`EventPayload::Other`] without
    /// inspecting the payload.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when a known event type carries a
    /// payload of the wrong shape.
    pub fn decode(event_type: &str, payload: &Value) -> Result<Self, serde_json::Error> {
        let decoded = match event_type {
            "PushEvent" => {
                let raw = RawPushPayload::deserialize(payload)?;
                Self::Push {
                    commits: raw
                        .commits
                        .unwrap_or_default()
                        .into_iter()
                        .map(|commit| PushedCommit {
                            sha: commit.sha.unwrap_or_default(),
                            message: commit.message.unwrap_or_default(),
                        })
                        .collect(),
                }
            }
            "PullRequestEvent" => {
                let raw = RawPullRequestPayload::deserialize(payload)?;
                let pull_request = raw.pull_request.unwrap_or_default();
                Self::PullRequest {
                    action: raw.action.unwrap_or_default(),
                    number: pull_request.number.unwrap_or_default(),
                    title: pull_request.title.unwrap_or_default(),
                }
            }
            "IssuesEvent" => {
                let raw = RawIssuesPayload::deserialize(payload)?;
                let issue = raw.issue.unwrap_or_default();
                Self::Issues {
                    action: raw.action.unwrap_or_default(),
                    number: issue.number.unwrap_or_default(),
                    title: issue.title.unwrap_or_default(),
                }
            }
            "ReleaseEvent" => {
                let raw = RawReleasePayload::deserialize(payload)?;
                let release = raw.release.unwrap_or_default();
                Self::Release {
                    action: raw.action.unwrap_or_default(),
                    tag_name: release.tag_name.unwrap_or_default(),
                    name: release.name.unwrap_or_default(),
                }
            }
            "WatchEvent" => {
                let raw = RawWatchPayload::deserialize(payload)?;
                Self::Watch {
                    action: raw.action.unwrap_or_default(),
                }
            }
            _ => Self::Other,
        };
        Ok(decoded)
    }
}

#[derive(Debug, Deserialize)]
struct RawPushPayload {
    #[serde(default)]
    commits: Option<Vec<RawPushCommit>>,
}

#[derive(Debug, Deserialize)]
struct RawPushCommit {
    #[serde(default)]
    sha: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawNumbered {
    #[serde(default)]
    number: Option<u64>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPullRequestPayload {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    pull_request: Option<RawNumbered>,
}

#[derive(Debug, Deserialize)]
struct RawIssuesPayload {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    issue: Option<RawNumbered>,
}

#[derive(Debug, Default, Deserialize)]
struct RawRelease {
    #[serde(default)]
    tag_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawReleasePayload {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    release: Option<RawRelease>,
}

#[derive(Debug, Deserialize)]
struct RawWatchPayload {
    #[serde(default)]
    action: Option<String>,
}
