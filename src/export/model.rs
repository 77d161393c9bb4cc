//! Export data models and the selectors that pick what gets written.
//!
//! Records are flat and independent. Every string field is always present
//! (empty when the source had no value) so that all output formats share
//! one column layout.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit authored by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Repository name.
    pub repo: String,
    /// Commit SHA.
    pub sha: String,
    /// Commit message.
    pub message: String,
    /// Git author name; empty in event mode.
    pub author: String,
    /// Author timestamp, or the push time in event mode.
    pub date: DateTime<Utc>,
}

/// A pull request opened in, or acted on by, the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Repository name.
    pub repo: String,
    /// Pull request number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// State such as `open` or `closed`.
    pub state: String,
    /// Author login.
    pub author: String,
    /// Event action such as `opened`; empty in repository mode.
    pub action: String,
    /// Creation or event timestamp.
    pub date: DateTime<Utc>,
}

/// An issue (never a pull request) from the user's repositories or events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Repository name.
    pub repo: String,
    /// Issue number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// State such as `open` or `closed`.
    pub state: String,
    /// Author login.
    pub author: String,
    /// Event action such as `opened`; empty in repository mode.
    pub action: String,
    /// Creation or event timestamp.
    pub date: DateTime<Utc>,
}

/// A published release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Repository name.
    pub repo: String,
    /// Git tag.
    pub tag_name: String,
    /// Release display name.
    pub name: String,
    /// Publisher login.
    pub author: String,
    /// Event action such as `published`; empty in repository mode.
    pub action: String,
    /// Creation or event timestamp.
    pub date: DateTime<Utc>,
}

/// A star/watch event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watch {
    /// Repository name.
    pub repo: String,
    /// Actor login; left empty by the event feed.
    pub author: String,
    /// Event action, usually `started`.
    pub action: String,
    /// Event timestamp.
    pub date: DateTime<Utc>,
}

/// Everything collected during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Export {
    /// Commit records.
    pub commits: Vec<Commit>,
    /// Pull request records.
    pub pull_requests: Vec<PullRequest>,
    /// Issue records.
    pub issues: Vec<Issue>,
    /// Release records.
    pub releases: Vec<Release>,
    /// Watch records.
    pub watch: Vec<Watch>,
}

impl Export {
    /// Number of records in the collection for `kind`.
    #[must_use]
    pub fn len_of(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Commits => self.commits.len(),
            RecordKind::PullRequests => self.pull_requests.len(),
            RecordKind::Issues => self.issues.len(),
            RecordKind::Releases => self.releases.len(),
            RecordKind::Watch => self.watch.len(),
        }
    }
}

/// Record collection selected by `--kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `commits`
    Commits,
    /// `pull_requests`
    PullRequests,
    /// `issues`
    Issues,
    /// `releases`
    Releases,
    /// `watch`
    Watch,
}

impl RecordKind {
    /// Parses a kind name; unknown names yield `None`.
    ///
    /// Writers treat `None` as "nothing to render" rather than an error.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "commits" => Some(Self::Commits),
            "pull_requests" => Some(Self::PullRequests),
            "issues" => Some(Self::Issues),
            "releases" => Some(Self::Releases),
            "watch" => Some(Self::Watch),
            _ => None,
        }
    }

    /// The kind's name as used on the command line and in filenames.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commits => "commits",
            Self::PullRequests => "pull_requests",
            Self::Issues => "issues",
            Self::Releases => "releases",
            Self::Watch => "watch",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON of the whole export.
    Json,
    /// CSV of the selected collection.
    Csv,
    /// Aligned text table on stdout.
    Table,
}

impl OutputFormat {
    /// Maps the `--format` value; anything other than `json` or `csv`
    /// (including the empty default) selects the terminal table.
    #[must_use]
    pub fn from_flag(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            "csv" => Self::Csv,
            _ => Self::Table,
        }
    }

    /// File extension for file-backed formats.
    #[must_use]
    pub const fn extension(self) -> Option<&'static str> {
        match self {
            Self::Json => Some("json"),
            Self::Csv => Some("csv"),
            Self::Table => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Table => write!(f, "table"),
        }
    }
}
