//! CSV formatter for a single record collection.
//!
//! Every kind shares one seven-column layout. Columns a kind has no value
//! for are left empty.

use std::io::Write;

use crate::github::ExportError;

use super::model::{Export, RecordKind};

/// Fixed header row written before any data.
pub const CSV_HEADER: [&str; 7] = ["Type", "Repo", "ID", "Title", "State", "Author", "Date"];

/// Writes the collection selected by `kind` as CSV.
///
/// An unknown kind (`None`) writes the header row only.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if writing or flushing fails.
pub fn write_csv<W: Write>(
    writer: &mut W,
    export: &Export,
    kind: Option<RecordKind>,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER).map_err(|e| csv_error(&e))?;

    if let Some(selected) = kind {
        for row in rows_for(export, selected) {
            csv_writer.write_record(&row).map_err(|e| csv_error(&e))?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::io("failed to flush CSV output", &e))
}

/// Flattens one collection into seven-column rows.
fn rows_for(export: &Export, kind: RecordKind) -> Vec<[String; 7]> {
    match kind {
        RecordKind::Commits => export
            .commits
            .iter()
            .map(|commit| {
                [
                    "Commit".to_owned(),
                    commit.repo.clone(),
                    commit.sha.clone(),
                    commit.message.clone(),
                    String::new(),
                    commit.author.clone(),
                    commit.date.to_string(),
                ]
            })
            .collect(),
        RecordKind::PullRequests => export
            .pull_requests
            .iter()
            .map(|pr| {
                [
                    "PullRequest".to_owned(),
                    pr.repo.clone(),
                    pr.number.to_string(),
                    pr.title.clone(),
                    pr.state.clone(),
                    pr.author.clone(),
                    pr.date.to_string(),
                ]
            })
            .collect(),
        RecordKind::Issues => export
            .issues
            .iter()
            .map(|issue| {
                [
                    "Issue".to_owned(),
                    issue.repo.clone(),
                    issue.number.to_string(),
                    issue.title.clone(),
                    issue.state.clone(),
                    issue.author.clone(),
                    issue.date.to_string(),
                ]
            })
            .collect(),
        RecordKind::Releases => export
            .releases
            .iter()
            .map(|release| {
                [
                    "Release".to_owned(),
                    release.repo.clone(),
                    release.tag_name.clone(),
                    release.name.clone(),
                    String::new(),
                    release.author.clone(),
                    release.date.to_string(),
                ]
            })
            .collect(),
        // The action lands in the Author column; consumers rely on the
        // seven-column layout staying fixed.
        RecordKind::Watch => export
            .watch
            .iter()
            .map(|watch| {
                [
                    "Watch".to_owned(),
                    watch.repo.clone(),
                    String::new(),
                    String::new(),
                    String::new(),
                    watch.action.clone(),
                    watch.date.to_string(),
                ]
            })
            .collect(),
    }
}

fn csv_error(error: &csv::Error) -> ExportError {
    ExportError::Io {
        message: format!("CSV write failed: {error}"),
    }
}
