//! Event mode: walk the user's performed-events feed page by page.

use tracing::debug;

use crate::export::{Commit, Export, Issue, PullRequest, Release, Watch};
use crate::github::{ActivityEvent, ActivityGateway, ExportError, PageCursor};

use super::payload::EventPayload;

/// Collects records from every event the authenticated user performed.
///
/// Events by other actors are skipped, as are events whose payload does not
/// decode. A page-fetch error aborts the run and discards everything
/// gathered so far.
///
/// # Errors
///
/// Propagates gateway failures from resolving the login or fetching a page.
pub async fn fetch_event_activity<G>(gateway: &G) -> Result<Export, ExportError>
where
    G: ActivityGateway + ?Sized,
{
    let login = gateway.authenticated_login().await?;
    let mut export = Export::default();
    let mut cursor = PageCursor::Start;

    loop {
        let page = gateway.performed_events(&login, &cursor).await?;
        debug!(events = page.events.len(), "fetched event page");

        for event in page.events {
            if event.actor.as_deref() != Some(login.as_str()) {
                continue;
            }
            record_event(event, &mut export);
        }

        match page.next {
            Some(next) => cursor = PageCursor::Next(next),
            None => break,
        }
    }

    Ok(export)
}

fn record_event(event: ActivityEvent, export: &mut Export) {
    let payload = match EventPayload::decode(&event.event_type, &event.payload) {
        Ok(payload) => payload,
        Err(error) => {
            debug!(
                event_type = %event.event_type,
                repository = %event.repository,
                error = %error,
                "skipping event with undecodable payload"
            );
            return;
        }
    };

    let repo = event.repository;
    let date = event.created_at;
    match payload {
        EventPayload::Push { commits } => {
            export
                .commits
                .extend(commits.into_iter().map(|commit| Commit {
                    repo: repo.clone(),
                    sha: commit.sha,
                    message: commit.message,
                    author: String::new(),
                    date,
                }));
        }
        EventPayload::PullRequest {
            action,
            number,
            title,
        } => export.pull_requests.push(PullRequest {
            repo,
            number,
            title,
            state: String::new(),
            author: String::new(),
            action,
            date,
        }),
        EventPayload::Issues {
            action,
            number,
            title,
        } => export.issues.push(Issue {
            repo,
            number,
            title,
            state: String::new(),
            author: String::new(),
            action,
            date,
        }),
        EventPayload::Release {
            action,
            tag_name,
            name,
        } => export.releases.push(Release {
            repo,
            tag_name,
            name,
            author: String::new(),
            action,
            date,
        }),
        EventPayload::Watch { action } => export.watch.push(Watch {
            repo,
            author: String::new(),
            action,
            date,
        }),
        EventPayload::Other => {}
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
