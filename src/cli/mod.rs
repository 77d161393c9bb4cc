//! CLI operation handlers.
//!
//! - [`export_activity`]: fetch the user's activity and write the export
//!
//! Help and version output is described in [`args`]; result-line
//! formatting is in [`output`].

pub mod args;
pub mod export_activity;
pub mod output;
