//! Notes command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use relcut_changelog::NotesComposer;
use relcut_core::config::load_config_or_default;
use relcut_core::store::DirStore;

use super::cut::{resolve_version, PreReleaseOverride};
use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Regenerate release notes from an existing archive
#[derive(Debug, Args)]
pub struct NotesCommand {
    /// Version whose archive to read (default: derive from the project manifest)
    #[arg(long = "for-version", value_name = "VERSION")]
    pub for_version: Option<String>,

    /// Output path for the release notes (default: from config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep every heading in the release notes, not just features
    #[arg(short, long)]
    pub detailed: bool,

    /// Pre-release handling
    #[arg(long = "pre-release", value_enum, default_value = "auto")]
    pub pre_release: PreReleaseOverride,
}

impl NotesCommand {
    /// Execute the notes command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = ?self.for_version, detailed = self.detailed, "executing notes command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let version = resolve_version(self.for_version.as_deref(), &cwd, &config)?;
        let is_prerelease = self.pre_release.resolve(&version);
        let store = DirStore::from_config(&cwd, &config.changelog);

        let composer = NotesComposer::new(config.notes.clone());
        let notes = composer.compose(&store, &version, self.detailed, is_prerelease)?;

        let notes_path = self
            .output
            .clone()
            .unwrap_or_else(|| config.notes.output.clone());
        std::fs::write(&notes_path, &notes)?;

        match cli.format {
            OutputFormat::Json => {
                let summary = serde_json::json!({
                    "version": version.as_str(),
                    "pre_release": is_prerelease,
                    "notes": notes_path,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::success(&format!(
                        "Release notes for {} written to {}",
                        style(version.as_str()).green().bold(),
                        style(notes_path.display()).cyan()
                    ));
                }
            }
        }

        Ok(())
    }
}
