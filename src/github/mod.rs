//! GitHub activity access and token validation.
//!
//! This module wraps Octocrab to resolve the authenticated user, list owned
//! repositories with their commits, pull requests, issues and releases, and
//! page through the user's event feed. Errors are mapped into user-friendly
//! variants so that callers can surface precise failures without exposing
//! Octocrab internals.

pub mod error;
pub mod gateway;
pub mod models;
pub mod token;

pub use error::ExportError;
pub use gateway::{ActivityGateway, EventPage, OctocrabActivityGateway, PER_PAGE, PageCursor};
pub use models::{
    ActivityEvent, CommitSummary, IssueSummary, OwnedRepository, PullRequestSummary,
    ReleaseSummary,
};
pub use token::{ApiBase, DEFAULT_API_BASE, PersonalAccessToken};

#[cfg(test)]
pub use gateway::MockActivityGateway;
