//! CLI commands

mod completions;
mod cut;
mod init;
mod notes;

pub use completions::CompletionsCommand;
pub use cut::{CutCommand, PreReleaseOverride};
pub use init::InitCommand;
pub use notes::NotesCommand;
