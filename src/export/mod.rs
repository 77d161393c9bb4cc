//! Export records and the writers that serialize them.
//!
//! The record model is flat: one struct per activity type, collected into
//! an [`Export`] aggregate that is built once per run and handed to exactly
//! one writer.
//!
//! # Supported Formats
//!
//! - **JSON**: the whole export, pretty-printed, regardless of kind
//! - **CSV**: the selected collection in a fixed seven-column layout
//! - **Table**: the selected collection as aligned text on stdout

mod csv;
mod json;
mod model;
mod path;
mod table;
#[cfg(test)]
mod test_helpers;

pub use self::csv::{CSV_HEADER, write_csv};
pub use json::write_json;
pub use model::{Commit, Export, Issue, OutputFormat, PullRequest, RecordKind, Release, Watch};
pub use path::{OutputTarget, resolve_output_target, write_export, write_format};
pub use table::write_table;
