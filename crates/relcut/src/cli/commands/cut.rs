//! Cut command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use relcut_changelog::{ArchiveBuilder, NotesComposer, VersionId};
use relcut_core::config::{load_config_or_default, Config};
use relcut_core::store::DirStore;
use relcut_core::ProjectManifest;

use crate::cli::{Cli, OutputFormat};
use crate::cli::output;

/// Pre-release handling for a cut
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PreReleaseOverride {
    /// Infer from the version's pre-release component
    #[default]
    Auto,
    /// Treat the version as a pre-release
    #[value(name = "true")]
    True,
    /// Treat the version as a final release
    #[value(name = "false")]
    False,
}

impl PreReleaseOverride {
    /// Resolve the effective pre-release flag for a version
    pub fn resolve(self, version: &VersionId) -> bool {
        match self {
            Self::Auto => version.is_prerelease(),
            Self::True => true,
            Self::False => false,
        }
    }
}

/// Resolve the version selector: an explicit identifier, or `auto` (the
/// default) reading the project manifest's version field.
pub fn resolve_version(selector: Option<&str>, root: &Path, config: &Config) -> anyhow::Result<VersionId> {
    let version = match selector {
        Some(selector) if selector != "auto" => VersionId::parse(selector)?,
        _ => {
            let manifest = ProjectManifest::load(&root.join(&config.changelog.manifest))?;
            VersionId::parse(&manifest.version_tag())?
        }
    };
    Ok(version)
}

/// Cut a release: archive the fragment, reset it, write release notes
#[derive(Debug, Args)]
pub struct CutCommand {
    /// Version to cut (default: derive from the project manifest)
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

impl CutCommand {
    /// Execute the cut command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = ?self.for_version, detailed = self.detailed, pre_release = ?self.pre_release, "executing cut command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let version = resolve_version(self.for_version.as_deref(), &cwd, &config)?;
        let is_prerelease = self.pre_release.resolve(&version);
        let store = DirStore::from_config(&cwd, &config.changelog);

        if !cli.quiet {
            println!("{}", output::key_value("Version", version.as_str()));
            println!(
                "{}",
                output::key_value("Archive", &store.archive_path(version.as_str()).display().to_string())
            );
        }

        let builder = ArchiveBuilder::new();
        builder.build(&store, &version)?;

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
                    "archive": store.archive_path(version.as_str()),
                    "notes": notes_path,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::success(&format!(
                        "Cut {} and reset the fragment",
                        style(version.as_str()).green().bold()
                    ));
                    output::success(&format!(
                        "Release notes written to {}",
                        style(notes_path.display()).cyan()
                    ));
                }
            }
        }

        Ok(())
    }
}
