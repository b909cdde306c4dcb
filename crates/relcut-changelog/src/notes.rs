//! Release notes composition
//!
//! Re-reads a version's archive and derives the user-facing notes: feature
//! sections only (unless detailed), links to the full archive and to any
//! pre-release archives that led up to the version, and a translator note.

use tracing::{debug, info, instrument};

use relcut_core::config::NotesConfig;
use relcut_core::error::Result;
use relcut_core::store::ChangelogStore;

use crate::extract::extract;
use crate::version::{preceding_prereleases, VersionId};

/// Composes release notes from an archived changelog
pub struct NotesComposer {
    config: NotesConfig,
}

impl NotesComposer {
    /// Create a new composer
    pub fn new(config: NotesConfig) -> Self {
        Self { config }
    }

    /// Compose release notes for an archived version.
    ///
    /// `detailed` keeps every section instead of only the feature headings.
    /// `is_prerelease` suppresses the pre-release cross-reference block.
    #[instrument(skip(self, store), fields(version = %version))]
    pub fn compose(
        &self,
        store: &dyn ChangelogStore,
        version: &VersionId,
        detailed: bool,
        is_prerelease: bool,
    ) -> Result<String> {
        let archive = store.read_archive(version.as_str())?;
        let doc = extract(&archive);

        let mut output = String::from("## Changelog\n\n");

        for section in doc.sections() {
            if !self.keeps(&section.heading, detailed) || section.is_empty() {
                continue;
            }

            debug!(heading = %section.heading, "keeping section");
            output.push_str(&section.heading);
            output.push_str("\n\n");
            for line in section.body() {
                output.push_str(line);
                output.push('\n');
            }
            output.push('\n');
        }

        let archive_link = self.archive_link(version);
        output.push_str(&format!("Full changelog at: {archive_link}\n"));

        if !is_prerelease {
            self.push_prerelease_links(&mut output, store, version)?;
        }

        output.push_str(&format!(
            "\nTranslators please refer to this link for a list of translation changes: \
             {archive_link}#{}\n",
            heading_anchor(&self.config.translation_heading)
        ));

        info!(version = %version, bytes = output.len(), "release notes composed");
        Ok(output)
    }

    /// Selection rule for a heading
    fn keeps(&self, heading: &str, detailed: bool) -> bool {
        if heading == self.config.translation_heading {
            return false;
        }
        if self.config.excluded_headings.iter().any(|h| h == heading) {
            return false;
        }
        if !detailed {
            return self.config.feature_headings.iter().any(|h| h == heading);
        }
        true
    }

    /// Cross-reference block for the pre-release train preceding `version`
    fn push_prerelease_links(
        &self,
        output: &mut String,
        store: &dyn ChangelogStore,
        version: &VersionId,
    ) -> Result<()> {
        let train = preceding_prereleases(version, &store.archive_ids()?);
        if train.is_empty() {
            return Ok(());
        }

        output.push_str("\nChangelogs of this version's pre-releases:\n\n");
        for prerelease in &train {
            let Some(title) = prerelease.prerelease_title() else {
                continue;
            };
            output.push_str(&format!(
                "- [{title}]({})\n",
                self.archive_link(prerelease)
            ));
        }

        Ok(())
    }

    fn archive_link(&self, version: &VersionId) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            version.archive_file()
        )
    }
}

/// GitHub-style anchor for a markdown heading
fn heading_anchor(heading: &str) -> String {
    heading
        .trim_start_matches('#')
        .trim()
        .to_lowercase()
        .replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use relcut_core::store::MemoryStore;

    const ARCHIVE: &str = "\
## Changelog v1.6.0

### New Features

- Added the tile viewer.

### Bugfixes

- Fixed crash when opening the map.

### Translation Changes

- Updated `menu.title`.

### Development Chores

- Bumped CI image.
";

    fn composer() -> NotesComposer {
        NotesComposer::new(NotesConfig::default())
    }

    fn store_with(version: &str, archive: &str) -> MemoryStore {
        MemoryStore::new("", "").with_archive(version, archive)
    }

    fn version(s: &str) -> VersionId {
        VersionId::parse(s).unwrap()
    }

    #[test]
    fn test_minimal_mode_keeps_feature_headings_only() {
        let store = store_with("v1.6.0", ARCHIVE);

        let notes = composer()
            .compose(&store, &version("v1.6.0"), false, false)
            .unwrap();

        assert!(notes.starts_with("## Changelog\n\n"));
        assert!(notes.contains("- Added the tile viewer."));
        assert!(!notes.contains("### Bugfixes"));
        assert!(!notes.contains("- Fixed crash when opening the map."));
    }

    #[test]
    fn test_translation_changes_dropped_in_every_mode() {
        let store = store_with("v1.6.0", ARCHIVE);

        for detailed in [false, true] {
            let notes = composer()
                .compose(&store, &version("v1.6.0"), detailed, false)
                .unwrap();
            assert!(!notes.contains("- Updated `menu.title`."));
            assert!(!notes.contains("### Development Chores"));
        }
    }

    #[test]
    fn test_detailed_mode_keeps_other_headings() {
        let store = store_with("v1.6.0", ARCHIVE);

        let notes = composer()
            .compose(&store, &version("v1.6.0"), true, false)
            .unwrap();

        assert!(notes.contains("### Bugfixes"));
        assert!(notes.contains("- Fixed crash when opening the map."));
    }

    #[test]
    fn test_empty_sections_dropped() {
        let archive = "## Changelog v1.6.0\n\n### New Features\n\n### Feature Updates\n\n- Improved menus.\n";
        let store = store_with("v1.6.0", archive);

        let notes = composer()
            .compose(&store, &version("v1.6.0"), false, false)
            .unwrap();

        assert!(!notes.contains("### New Features"));
        assert!(notes.contains("- Improved menus."));
    }

    #[test]
    fn test_full_changelog_link_and_translator_note() {
        let store = store_with("v1.6.0", ARCHIVE);

        let notes = composer()
            .compose(&store, &version("v1.6.0"), false, false)
            .unwrap();

        let base = NotesConfig::default().base_url;
        assert!(notes.contains(&format!("Full changelog at: {base}/v1.6.0.md")));
        assert!(notes.contains(&format!(
            "Translators please refer to this link for a list of translation changes: \
             {base}/v1.6.0.md#translation-changes"
        )));
    }

    #[test]
    fn test_prerelease_cross_references_for_final_release() {
        let store = store_with("v1.6.0", ARCHIVE)
            .with_archive("v1.6.0-alpha.1", "## Changelog v1.6.0-alpha.1\n")
            .with_archive("v1.6.0-beta.1", "## Changelog v1.6.0-beta.1\n")
            .with_archive("v1.5.0", "## Changelog v1.5.0\n");

        let notes = composer()
            .compose(&store, &version("v1.6.0"), false, false)
            .unwrap();

        let base = NotesConfig::default().base_url;
        let alpha = notes
            .find(&format!("- [Alpha 1]({base}/v1.6.0-alpha.1.md)"))
            .unwrap();
        let beta = notes
            .find(&format!("- [Beta 1]({base}/v1.6.0-beta.1.md)"))
            .unwrap();
        assert!(alpha < beta);
        assert!(!notes.contains("v1.5.0.md)"));
    }

    #[test]
    fn test_no_cross_references_for_prerelease() {
        let archive = "## Changelog v1.6.0-rc.2\n\n### New Features\n\n- Added things.\n";
        let store = store_with("v1.6.0-rc.2", archive)
            .with_archive("v1.6.0-alpha.1", "## Changelog v1.6.0-alpha.1\n")
            .with_archive("v1.6.0-beta.1", "## Changelog v1.6.0-beta.1\n");

        let notes = composer()
            .compose(&store, &version("v1.6.0-rc.2"), false, true)
            .unwrap();

        assert!(!notes.contains("pre-releases"));
        assert!(!notes.contains("- [Alpha 1]"));
    }

    #[test]
    fn test_no_cross_reference_block_without_prior_prereleases() {
        let store = store_with("v1.6.0", ARCHIVE).with_archive("v1.5.0", "x");

        let notes = composer()
            .compose(&store, &version("v1.6.0"), false, false)
            .unwrap();

        assert!(!notes.contains("pre-releases"));
    }

    #[test]
    fn test_missing_archive_is_fatal() {
        let store = MemoryStore::new("", "");

        let result = composer().compose(&store, &version("v1.6.0"), false, false);
        assert!(result.is_err());
    }
}
