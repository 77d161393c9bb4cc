//! Shared record fixtures for export tests.

use chrono::{DateTime, TimeZone, Utc};

use super::{Commit, Issue, PullRequest, Release, Watch};

/// Fixed timestamp used across writer tests.
pub fn sample_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("sample date should be unambiguous"))
}

/// Its `Display` form, as written to CSV and table output.
pub const SAMPLE_DATE_TEXT: &str = "2024-05-01 12:00:00 UTC";

pub fn commit(repo: &str, sha: &str, message: &str) -> Commit {
    Commit {
        repo: repo.to_owned(),
        sha: sha.to_owned(),
        message: message.to_owned(),
        author: "Mona Lisa".to_owned(),
        date: sample_date(),
    }
}

pub fn pull_request(repo: &str, number: u64, title: &str) -> PullRequest {
    PullRequest {
        repo: repo.to_owned(),
        number,
        title: title.to_owned(),
        state: "open".to_owned(),
        author: "octocat".to_owned(),
        action: String::new(),
        date: sample_date(),
    }
}

pub fn issue(repo: &str, number: u64, title: &str) -> Issue {
    Issue {
        repo: repo.to_owned(),
        number,
        title: title.to_owned(),
        state: "closed".to_owned(),
        author: "octocat".to_owned(),
        action: String::new(),
        date: sample_date(),
    }
}

pub fn release(repo: &str, tag_name: &str, name: &str) -> Release {
    Release {
        repo: repo.to_owned(),
        tag_name: tag_name.to_owned(),
        name: name.to_owned(),
        author: "octocat".to_owned(),
        action: String::new(),
        date: sample_date(),
    }
}

pub fn watch(repo: &str, action: &str) -> Watch {
    Watch {
        repo: repo.to_owned(),
        author: String::new(),
        action: action.to_owned(),
        date: sample_date(),
    }
}
