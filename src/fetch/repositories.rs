//! Bulk mode: walk every owned repository and collect one record kind.

use tracing::debug;

use crate::export::{Commit, Export, Issue, PullRequest, RecordKind, Release};
use crate::github::{ActivityGateway, ExportError, OwnedRepository};

/// Collects records of `kind` from every repository the user owns.
///
/// The kind is validated before any API call. Repositories are visited in
/// list order and every page is fetched; the first gateway error aborts
/// the run and nothing collected so far is returned.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedKind`] for `watch` or any unknown kind,
/// and propagates gateway failures.
pub async fn fetch_repository_activity<G>(gateway: &G, kind: &str) -> Result<Export, ExportError>
where
    G: ActivityGateway + ?Sized,
{
    let selected = bulk_kind(kind)?;

    let repositories = gateway.owned_repositories().await?;
    let login = gateway.authenticated_login().await?;
    debug!(
        login = %login,
        repositories = repositories.len(),
        kind = %selected,
        "collecting repository activity"
    );

    let mut export = Export::default();
    for repository in &repositories {
        let before = export.len_of(selected);
        collect(gateway, repository, &login, selected, &mut export).await?;
        debug!(
            repository = %repository.name,
            records = export.len_of(selected).saturating_sub(before),
            "collected repository records"
        );
    }
    Ok(export)
}

fn bulk_kind(kind: &str) -> Result<RecordKind, ExportError> {
    match RecordKind::parse(kind) {
        Some(
            selected @ (RecordKind::Commits
            | RecordKind::PullRequests
            | RecordKind::Issues
            | RecordKind::Releases),
        ) => Ok(selected),
        Some(RecordKind::Watch) | None => Err(ExportError::UnsupportedKind {
            kind: kind.to_owned(),
        }),
    }
}

async fn collect<G>(
    gateway: &G,
    repository: &OwnedRepository,
    login: &str,
    kind: RecordKind,
    export: &mut Export,
) -> Result<(), ExportError>
where
    G: ActivityGateway + ?Sized,
{
    let repo = &repository.name;
    match kind {
        RecordKind::Commits => {
            let commits = gateway.list_commits(repository, login).await?;
            export
                .commits
                .extend(commits.into_iter().map(|commit| Commit {
                    repo: repo.clone(),
                    sha: commit.sha,
                    message: commit.message,
                    author: commit.author.unwrap_or_default(),
                    date: commit.authored_at,
                }));
        }
        RecordKind::PullRequests => {
            let pull_requests = gateway.list_pull_requests(repository).await?;
            export
                .pull_requests
                .extend(pull_requests.into_iter().map(|pr| PullRequest {
                    repo: repo.clone(),
                    number: pr.number,
                    title: pr.title.unwrap_or_default(),
                    state: pr.state.unwrap_or_default(),
                    author: pr.author.unwrap_or_default(),
                    action: String::new(),
                    date: pr.created_at,
                }));
        }
        RecordKind::Issues => {
            let issues = gateway.list_issues(repository).await?;
            export.issues.extend(
                issues
                    .into_iter()
                    .filter(|issue| !issue.is_pull_request())
                    .map(|issue| Issue {
                        repo: repo.clone(),
                        number: issue.number,
                        title: issue.title.unwrap_or_default(),
                        state: issue.state.unwrap_or_default(),
                        author: issue.author.unwrap_or_default(),
                        action: String::new(),
                        date: issue.created_at,
                    }),
            );
        }
        RecordKind::Releases => {
            let releases = gateway.list_releases(repository).await?;
            export
                .releases
                .extend(releases.into_iter().map(|release| Release {
                    repo: repo.clone(),
                    tag_name: release.tag_name,
                    name: release.name.unwrap_or_default(),
                    author: release.author.unwrap_or_default(),
                    action: String::new(),
                    date: release.created_at,
                }));
        }
        RecordKind::Watch => {
            return Err(ExportError::UnsupportedKind {
                kind: kind.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "repositories_tests.rs"]
mod tests;
