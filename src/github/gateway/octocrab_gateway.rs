//! Octocrab implementation of the activity gateway.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::github::error::ExportError;
use crate::github::models::{
    ActivityEvent, ApiCommit, ApiEvent, ApiIssue, ApiPullRequest, ApiRelease, ApiRepository,
    ApiUser, CommitSummary, IssueSummary, OwnedRepository, PullRequestSummary, ReleaseSummary,
};
use crate::github::token::{ApiBase, PersonalAccessToken};

use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;
use super::{ActivityGateway, EventPage, PER_PAGE, PageCursor};

/// Octocrab-backed activity gateway.
pub struct OctocrabActivityGateway {
    client: Octocrab,
}

impl OctocrabActivityGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and API base.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidUrl` when the base URI is rejected or
    /// `ExportError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &ApiBase) -> Result<Self, ExportError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }

    /// Fetches the first page of `route` and follows every `next` link.
    async fn list_all<Api, Summary, Params>(
        &self,
        operation: &str,
        route: String,
        params: &Params,
    ) -> Result<Vec<Summary>, ExportError>
    where
        Api: DeserializeOwned + Send,
        Summary: From<Api>,
        Params: Serialize + Sync,
    {
        tracing::debug!("{operation}: GET {route}");
        let first: Page<Api> = self
            .client
            .get(route, Some(params))
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?;

        self.client
            .all_pages(first)
            .await
            .map(|items| items.into_iter().map(Summary::from).collect())
            .map_err(|error| map_octocrab_error(operation, &error))
    }
}

#[async_trait]
impl ActivityGateway for OctocrabActivityGateway {
    async fn authenticated_login(&self) -> Result<String, ExportError> {
        let user: ApiUser = self
            .client
            .get("/user", None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("authenticated user", &error))?;

        user.login.ok_or_else(|| ExportError::Api {
            message: "authenticated user response did not include a login".to_owned(),
        })
    }

    async fn owned_repositories(&self) -> Result<Vec<OwnedRepository>, ExportError> {
        let per_page = PER_PAGE.to_string();
        let params = [("affiliation", "owner"), ("per_page", per_page.as_str())];
        self.list_all::<ApiRepository, _, _>("list repositories", "/user/repos".to_owned(), &params)
            .await
    }

    async fn list_commits(
        &self,
        repository: &OwnedRepository,
        author: &str,
    ) -> Result<Vec<CommitSummary>, ExportError> {
        let per_page = PER_PAGE.to_string();
        let params = [("author", author), ("per_page", per_page.as_str())];
        self.list_all::<ApiCommit, _, _>("list commits", repository.path("commits"), &params)
            .await
    }

    async fn list_pull_requests(
        &self,
        repository: &OwnedRepository,
    ) -> Result<Vec<PullRequestSummary>, ExportError> {
        let per_page = PER_PAGE.to_string();
        let params = [("per_page", per_page.as_str())];
        self.list_all::<ApiPullRequest, _, _>("list pulls", repository.path("pulls"), &params)
            .await
    }

    async fn list_issues(
        &self,
        repository: &OwnedRepository,
    ) -> Result<Vec<IssueSummary>, ExportError> {
        let per_page = PER_PAGE.to_string();
        let params = [("per_page", per_page.as_str())];
        self.list_all::<ApiIssue, _, _>("list issues", repository.path("issues"), &params)
            .await
    }

    async fn list_releases(
        &self,
        repository: &OwnedRepository,
    ) -> Result<Vec<ReleaseSummary>, ExportError> {
        let per_page = PER_PAGE.to_string();
        let params = [("per_page", per_page.as_str())];
        self.list_all::<ApiRelease, _, _>("list releases", repository.path("releases"), &params)
            .await
    }

    async fn performed_events(
        &self,
        login: &str,
        cursor: &PageCursor,
    ) -> Result<EventPage, ExportError> {
        let page: Page<ApiEvent> = match cursor {
            PageCursor::Start => {
                let route = format!("/users/{login}/events");
                let per_page = PER_PAGE.to_string();
                let params = [("per_page", per_page.as_str())];
                tracing::debug!("user events: GET {route}");
                self.client
                    .get(route, Some(&params))
                    .await
                    .map_err(|error| map_octocrab_error("user events", &error))?
            }
            PageCursor::Next(uri) => {
                tracing::debug!("user events: GET {uri}");
                let maybe_page = self
                    .client
                    .get_page::<ApiEvent>(&Some(uri.clone()))
                    .await
                    .map_err(|error| map_octocrab_error("user events", &error))?;
                let Some(next_page) = maybe_page else {
                    return Ok(EventPage {
                        events: Vec::new(),
                        next: None,
                    });
                };
                next_page
            }
        };

        Ok(EventPage {
            next: page.next,
            events: page.items.into_iter().map(ActivityEvent::from).collect(),
        })
    }
}

#[cfg(test)]
#[path = "octocrab_gateway_tests.rs"]
mod tests;
