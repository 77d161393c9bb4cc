//! Activity fetchers.
//!
//! Two strategies build an [`Export`]:
//!
//! - [`FetchMode::Repositories`] walks every owned repository and collects
//!   one record kind (see [`fetch_repository_activity`]).
//! - [`FetchMode::Events`] walks the user's performed-events feed and may
//!   fill any collection (see [`fetch_event_activity`]).

mod events;
mod payload;
mod repositories;

pub use events::fetch_event_activity;
pub use payload::{EventPayload, PushedCommit};
pub use repositories::fetch_repository_activity;

use crate::export::Export;
use crate::github::{ActivityGateway, ExportError};

/// Fetch strategy selected by `--mode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// Bulk listing across owned repositories.
    #[default]
    Repositories,
    /// The user's performed-events feed.
    Events,
}

impl FetchMode {
    /// Maps the `--mode` value: `events` selects the event feed, anything
    /// else the repository walk.
    #[must_use]
    pub fn from_flag(value: &str) -> Self {
        if value == "events" {
            Self::Events
        } else {
            Self::Repositories
        }
    }

    /// Runs the selected strategy.
    ///
    /// `kind` only steers repository mode; event mode collects every
    /// recorded event type regardless.
    ///
    /// # Errors
    ///
    /// Propagates the strategy's failure.
    pub async fn fetch<G>(self, gateway: &G, kind: &str) -> Result<Export, ExportError>
    where
        G: ActivityGateway + ?Sized,
    {
        match self {
            Self::Repositories => fetch_repository_activity(gateway, kind).await,
            Self::Events => fetch_event_activity(gateway).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::FetchMode;
    use crate::export::Export;
    use crate::github::{EventPage, ExportError, MockActivityGateway};

    #[rstest]
    #[case("events", FetchMode::Events)]
    #[case("", FetchMode::Repositories)]
    #[case("repos", FetchMode::Repositories)]
    #[case("Events", FetchMode::Repositories)]
    fn from_flag_selects_events_only_for_exact_match(
        #[case] flag: &str,
        #[case] expected: FetchMode,
    ) {
        assert_eq!(FetchMode::from_flag(flag), expected);
    }

    #[tokio::test]
    async fn events_mode_ignores_kind() {
        let mut gateway = MockActivityGateway::new();
        gateway
            .expect_authenticated_login()
            .times(1)
            .returning(|| Ok(String::from("octocat")));
        gateway
            .expect_performed_events()
            .times(1)
            .returning(|_, _| {
                Ok(EventPage {
                    events: Vec::new(),
                    next: None,
                })
            });

        let export = FetchMode::Events
            .fetch(&gateway, "bogus")
            .await
            .expect("event mode should not validate kind");

        assert_eq!(export, Export::default());
    }

    #[tokio::test]
    async fn repositories_mode_validates_kind() {
        let gateway = MockActivityGateway::new();

        let result = FetchMode::Repositories.fetch(&gateway, "watch").await;

        assert_eq!(
            result,
            Err(ExportError::UnsupportedKind {
                kind: String::from("watch")
            })
        );
    }
}
