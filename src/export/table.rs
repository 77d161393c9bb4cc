//! Column-aligned text table for terminal output.
//!
//! Each cell except the last in a row is padded to its column's display
//! width plus one space and closed with `|`; the trailing cell carries no
//! padding.

use std::io::Write;

use tabled::builder::Builder;
use tabled::settings::{Padding, Style};

use crate::github::ExportError;

use super::model::{Export, RecordKind};

/// Writes the collection selected by `kind` as an aligned table.
///
/// An unknown kind (`None`) writes nothing.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if writing fails.
pub fn write_table<W: Write>(
    writer: &mut W,
    export: &Export,
    kind: Option<RecordKind>,
) -> Result<(), ExportError> {
    let Some(selected) = kind else {
        return Ok(());
    };

    let mut builder = Builder::default();
    builder.push_record(header_for(selected));
    for row in rows_for(export, selected) {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::empty().vertical('|'))
        .with(Padding::new(0, 1, 0, 0));

    // The last column is still filled to its width.
    for line in table.to_string().lines() {
        writeln!(writer, "{}", line.trim_end())
            .map_err(|e| ExportError::io("failed to write table", &e))?;
    }
    writer
        .flush()
        .map_err(|e| ExportError::io("failed to flush table", &e))
}

fn header_for(kind: RecordKind) -> Vec<String> {
    let columns: &[&str] = match kind {
        RecordKind::Commits => &["Date", "Repo", "SHA", "Author", "Message"],
        RecordKind::PullRequests | RecordKind::Issues => {
            &["Date", "Repo", "Number", "Title", "State", "Author"]
        }
        RecordKind::Releases => &["Date", "Repo", "Tag", "Name", "Author"],
        RecordKind::Watch => &["Date", "Repo", "Action"],
    };
    columns.iter().map(|&column| column.to_owned()).collect()
}

fn rows_for(export: &Export, kind: RecordKind) -> Vec<Vec<String>> {
    match kind {
        RecordKind::Commits => export
            .commits
            .iter()
            .map(|c| {
                vec![
                    c.date.to_string(),
                    c.repo.clone(),
                    c.sha.clone(),
                    c.author.clone(),
                    single_line(&c.message),
                ]
            })
            .collect(),
        RecordKind::PullRequests => export
            .pull_requests
            .iter()
            .map(|pr| {
                vec![
                    pr.date.to_string(),
                    pr.repo.clone(),
                    pr.number.to_string(),
                    single_line(&pr.title),
                    pr.state.clone(),
                    pr.author.clone(),
                ]
            })
            .collect(),
        RecordKind::Issues => export
            .issues
            .iter()
            .map(|issue| {
                vec![
                    issue.date.to_string(),
                    issue.repo.clone(),
                    issue.number.to_string(),
                    single_line(&issue.title),
                    issue.state.clone(),
                    issue.author.clone(),
                ]
            })
            .collect(),
        RecordKind::Releases => export
            .releases
            .iter()
            .map(|r| {
                vec![
                    r.date.to_string(),
                    r.repo.clone(),
                    r.tag_name.clone(),
                    single_line(&r.name),
                    r.author.clone(),
                ]
            })
            .collect(),
        RecordKind::Watch => export
            .watch
            .iter()
            .map(|w| vec![w.date.to_string(), w.repo.clone(), w.action.clone()])
            .collect(),
    }
}

/// Multi-line text would break row alignment.
fn single_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}
