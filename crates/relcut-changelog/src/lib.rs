//! Relcut Changelog - Changelog archiving and release notes
//!
//! This crate parses heading-delimited changelog fragments, archives them
//! per version and derives filtered release notes.

pub mod builder;
pub mod extract;
pub mod notes;
pub mod types;
pub mod version;

pub use builder::ArchiveBuilder;
pub use extract::extract;
pub use notes::NotesComposer;
pub use types::{Document, Section};
pub use version::{preceding_prereleases, VersionId};
