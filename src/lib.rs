//! github-exporter library crate for exporting a user's GitHub activity.
//!
//! The library wraps Octocrab to list a user's owned repositories or walk
//! their event feed, flattens the responses into export records, and writes
//! them as JSON, CSV, or an aligned terminal table. Errors are surfaced as
//! friendly variants that the CLI prints as-is.

pub mod config;
pub mod export;
pub mod fetch;
pub mod github;
pub mod logging;

pub use config::ExporterConfig;
pub use export::{Export, OutputFormat, OutputTarget, RecordKind};
pub use fetch::FetchMode;
pub use github::{
    ActivityGateway, ApiBase, ExportError, OctocrabActivityGateway, PersonalAccessToken,
};
