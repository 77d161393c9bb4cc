//! Activity export operation.

use std::io::{self, Write};

use chrono::{Local, NaiveDate};
use github_exporter::export::{resolve_output_target, write_export};
use github_exporter::{
    ActivityGateway, ApiBase, ExportError, ExporterConfig, OctocrabActivityGateway, OutputTarget,
    PersonalAccessToken,
};
use tracing::info;

/// Exports the configured activity through the Octocrab gateway.
///
/// # Errors
///
/// Returns [`ExportError::MissingToken`] before any network call when no
/// token is configured, and propagates fetch and write failures.
pub async fn run(config: &ExporterConfig) -> Result<OutputTarget, ExportError> {
    let today = Local::now().date_naive();
    run_with_gateway_builder(config, OctocrabActivityGateway::for_token, today, || {
        io::stdout().lock()
    })
    .await
}

/// Exports activity using a custom gateway builder.
///
/// `today` stamps the output filename. Table output goes to the writer
/// returned by `open_console`, which is only called once the export has
/// been fetched. This function is exposed for testing with mock gateways.
pub async fn run_with_gateway_builder<G, F, W, C>(
    config: &ExporterConfig,
    build_gateway: F,
    today: NaiveDate,
    open_console: C,
) -> Result<OutputTarget, ExportError>
where
    G: ActivityGateway,
    F: FnOnce(&PersonalAccessToken, &ApiBase) -> Result<G, ExportError>,
    W: Write,
    C: FnOnce() -> W,
{
    let token = config.resolve_token()?;
    let api_base = config.api_base()?;
    let gateway = build_gateway(&token, &api_base)?;

    let mode = config.fetch_mode();
    let kind = config.kind();
    let export = mode.fetch(&gateway, kind).await?;

    let format = config.output_format();
    let target = resolve_output_target(config.output_path(), kind, format, today);
    write_export(&target, format, &export, config.record_kind(), open_console)?;

    info!(?mode, %format, %target, "export written");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use camino::Utf8PathBuf;
    use chrono::{TimeZone, Utc};
    use github_exporter::github::{
        ActivityEvent, CommitSummary, EventPage, IssueSummary, OwnedRepository, PageCursor,
        PullRequestSummary, ReleaseSummary,
    };
    use github_exporter::{Export, ExportError, ExporterConfig, OutputTarget};
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    /// Gateway serving one repository with fixed records and one event page.
    #[derive(Clone, Default)]
    struct StubGateway {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl StubGateway {
        fn record(&self, call: &str) {
            self.calls
                .lock()
                .expect("calls mutex should be available")
                .push(call.to_owned());
        }

        fn calls(&self) -> Vec<String> {
            self.calls
                .lock()
                .expect("calls mutex should be available")
                .clone()
        }
    }

    fn created_at() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[async_trait]
    impl ActivityGateway for StubGateway {
        async fn authenticated_login(&self) -> Result<String, ExportError> {
            self.record("login");
            Ok(String::from("octocat"))
        }

        async fn owned_repositories(&self) -> Result<Vec<OwnedRepository>, ExportError> {
            self.record("repositories");
            Ok(vec![OwnedRepository::new("octocat", "alpha")])
        }

        async fn list_commits(
            &self,
            _repository: &OwnedRepository,
            _author: &str,
        ) -> Result<Vec<CommitSummary>, ExportError> {
            self.record("commits");
            Ok(vec![
                CommitSummary {
                    sha: String::from("c1"),
                    message: String::from("first"),
                    author: Some(String::from("Mona Lisa")),
                    authored_at: created_at(),
                },
                CommitSummary {
                    sha: String::from("c2"),
                    message: String::from("second"),
                    author: Some(String::from("Mona Lisa")),
                    authored_at: created_at(),
                },
            ])
        }

        async fn list_pull_requests(
            &self,
            _repository: &OwnedRepository,
        ) -> Result<Vec<PullRequestSummary>, ExportError> {
            self.record("pull_requests");
            Ok(Vec::new())
        }

        async fn list_issues(
            &self,
            _repository: &OwnedRepository,
        ) -> Result<Vec<IssueSummary>, ExportError> {
            self.record("issues");
            Ok(Vec::new())
        }

        async fn list_releases(
            &self,
            _repository: &OwnedRepository,
        ) -> Result<Vec<ReleaseSummary>, ExportError> {
            self.record("releases");
            Ok(vec![ReleaseSummary {
                tag_name: String::from("v1.0.0"),
                name: Some(String::from("v1.0")),
                author: Some(String::from("octocat")),
                created_at: created_at(),
            }])
        }

        async fn performed_events(
            &self,
            _login: &str,
            _cursor: &PageCursor,
        ) -> Result<EventPage, ExportError> {
            self.record("events");
            Ok(EventPage {
                events: vec![ActivityEvent {
                    event_type: String::from("WatchEvent"),
                    actor: Some(String::from("octocat")),
                    repository: String::from("rust-lang/rust"),
                    payload: json!({"action": "started"}),
                    created_at: created_at(),
                }],
                next: None,
            })
        }
    }

    fn export_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).expect("valid date")
    }

    fn config_in(dir: &TempDir, format: &str, kind: &str) -> ExporterConfig {
        let base = dir.path().join("github-export.json");
        ExporterConfig {
            token: Some(String::from("test-token")),
            output: Some(base.to_string_lossy().into_owned()),
            format: Some(format.to_owned()),
            kind: Some(kind.to_owned()),
            ..Default::default()
        }
    }

    fn file_path(target: &OutputTarget) -> Utf8PathBuf {
        match target {
            OutputTarget::File(path) => path.clone(),
            OutputTarget::Stdout => panic!("expected file target"),
        }
    }

    #[tokio::test]
    async fn commits_json_export_writes_all_collections() {
        let dir = TempDir::new().expect("create temp dir");
        let config = config_in(&dir, "json", "commits");
        let gateway = StubGateway::default();
        let builder_gateway = gateway.clone();

        let target = run_with_gateway_builder(
            &config,
            move |_, _| Ok(builder_gateway),
            export_date(),
            || -> Vec<u8> { panic!("file output should not open the console") },
        )
        .await
        .expect("export should succeed");

        let path = file_path(&target);
        assert_eq!(
            path.file_name(),
            Some("github-commits-export-20240502.json")
        );
        let contents = std::fs::read_to_string(&path).expect("read export");
        let export: Export = serde_json::from_str(&contents).expect("valid JSON");
        let shas: Vec<&str> = export.commits.iter().map(|c| c.sha.as_str()).collect();
        assert_eq!(shas, vec!["c1", "c2"]);
        assert!(export.pull_requests.is_empty());
        assert!(export.watch.is_empty());
        assert_eq!(gateway.calls(), vec!["repositories", "login", "commits"]);
    }

    #[tokio::test]
    async fn releases_csv_export_writes_release_row() {
        let dir = TempDir::new().expect("create temp dir");
        let config = config_in(&dir, "csv", "releases");
        let mut console = Vec::new();

        let target = run_with_gateway_builder(
            &config,
            |_, _| Ok(StubGateway::default()),
            export_date(),
            || &mut console,
        )
        .await
        .expect("export should succeed");

        let contents = std::fs::read_to_string(file_path(&target)).expect("read export");
        assert_eq!(
            contents.lines().collect::<Vec<_>>(),
            vec![
                "Type,Repo,ID,Title,State,Author,Date",
                "Release,alpha,v1.0.0,v1.0,,octocat,2024-05-01 12:00:00 UTC",
            ]
        );
    }

    #[tokio::test]
    async fn events_table_export_prints_to_console() {
        let config = ExporterConfig {
            token: Some(String::from("test-token")),
            kind: Some(String::from("watch")),
            mode: Some(String::from("events")),
            ..Default::default()
        };
        let mut console = Vec::new();

        let target = run_with_gateway_builder(
            &config,
            |_, _| Ok(StubGateway::default()),
            export_date(),
            || &mut console,
        )
        .await
        .expect("export should succeed");

        assert_eq!(target, OutputTarget::Stdout);
        let output = String::from_utf8(console).expect("valid UTF-8");
        assert!(output.starts_with("Date"), "got: {output}");
        assert!(output.contains("|rust-lang/rust |started"), "got: {output}");
    }

    #[tokio::test]
    async fn unsupported_kind_fails_without_output() {
        let dir = TempDir::new().expect("create temp dir");
        let config = config_in(&dir, "json", "bogus");
        let gateway = StubGateway::default();
        let builder_gateway = gateway.clone();

        let result = run_with_gateway_builder(
            &config,
            move |_, _| Ok(builder_gateway),
            export_date(),
            || -> Vec<u8> { panic!("a failed fetch should not open the console") },
        )
        .await;

        assert_eq!(
            result,
            Err(ExportError::UnsupportedKind {
                kind: String::from("bogus")
            })
        );
        assert!(gateway.calls().is_empty(), "no API call expected");
        let entries = std::fs::read_dir(dir.path()).expect("list dir").count();
        assert_eq!(entries, 0, "no output file expected");
    }

    #[tokio::test]
    async fn missing_token_fails_before_gateway_is_built() {
        let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
        let config = ExporterConfig::default();
        let mut console = Vec::new();

        let result = run_with_gateway_builder(
            &config,
            |_, _| -> Result<StubGateway, ExportError> {
                panic!("gateway should not be built without a token")
            },
            export_date(),
            || &mut console,
        )
        .await;

        assert_eq!(result, Err(ExportError::MissingToken));
    }

    #[tokio::test]
    async fn builder_receives_configured_api_base() {
        let captured = Arc::new(Mutex::new(None));
        let captured_in_builder = Arc::clone(&captured);
        let config = ExporterConfig {
            token: Some(String::from("test-token")),
            api_url: Some(String::from("https://ghe.example.com/api/v3")),
            kind: Some(String::from("watch")),
            mode: Some(String::from("events")),
            ..Default::default()
        };
        let mut console = Vec::new();

        run_with_gateway_builder(
            &config,
            move |token: &PersonalAccessToken, api_base: &ApiBase| {
                captured_in_builder
                    .lock()
                    .expect("capture mutex should be available")
                    .replace((token.value().to_owned(), api_base.as_uri().to_string()));
                Ok(StubGateway::default())
            },
            export_date(),
            || &mut console,
        )
        .await
        .expect("export should succeed");

        let (token, base) = captured
            .lock()
            .expect("capture mutex should be available")
            .clone()
            .expect("builder should be called");
        assert_eq!(token, "test-token");
        assert_eq!(base, "https://ghe.example.com/api/v3");
    }
}
