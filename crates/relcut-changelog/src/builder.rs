//! Final changelog archive builder
//!
//! Consumes the working fragment, writes the permanent `<version>.md`
//! archive and resets the fragment from the default template.

use tracing::{debug, info, instrument};

use relcut_core::error::Result;
use relcut_core::store::ChangelogStore;

use crate::extract::extract;
use crate::types::Document;
use crate::version::VersionId;

/// Builds the permanent archive for a version
pub struct ArchiveBuilder;

impl ArchiveBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }

    /// Archive the working fragment as `version` and reset the fragment.
    ///
    /// The archive is fully written before the fragment is reset: a crash
    /// between the two leaves the archive on disk and the fragment intact,
    /// so the run can simply be repeated.
    #[instrument(skip(self, store), fields(version = %version))]
    pub fn build(&self, store: &dyn ChangelogStore, version: &VersionId) -> Result<String> {
        let fragment = store.read_fragment()?;
        let doc = extract(&fragment);

        let content = self.render(version, &doc);
        store.write_archive(version.as_str(), &content)?;
        store.reset_fragment()?;

        info!(version = %version, bytes = content.len(), "archive built and fragment reset");
        Ok(content)
    }

    /// Render the archive content: a title line, then every non-empty
    /// section in fragment order.
    pub fn render(&self, version: &VersionId, doc: &Document) -> String {
        let mut output = String::new();
        output.push_str(&format!("## Changelog {version}\n\n"));

        for section in doc.sections() {
            if section.is_empty() {
                debug!(heading = %section.heading, "skipping empty section");
                continue;
            }

            output.push_str(&section.heading);
            output.push_str("\n\n");
            for line in section.body() {
                output.push_str(line);
                output.push('\n');
            }
            output.push('\n');
        }

        output
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relcut_core::store::MemoryStore;

    const TEMPLATE: &str = "### New Features\n\n### Feature Updates\n\n### Bugfixes\n";

    const FRAGMENT: &str = "\
### New Features

- Added the tile viewer.

### Feature Updates

### Bugfixes

- Fixed crash when opening the map.
";

    fn version(s: &str) -> VersionId {
        VersionId::parse(s).unwrap()
    }

    #[test]
    fn test_archive_content() {
        let store = MemoryStore::new(FRAGMENT, TEMPLATE);
        let builder = ArchiveBuilder::new();

        let content = builder.build(&store, &version("v1.6.0")).unwrap();

        assert!(content.starts_with("## Changelog v1.6.0\n\n"));
        assert!(content.contains("### New Features\n\n- Added the tile viewer.\n"));
        assert!(content.contains("### Bugfixes\n\n- Fixed crash when opening the map.\n"));
        assert_eq!(store.archive("v1.6.0").as_deref(), Some(content.as_str()));
    }

    #[test]
    fn test_empty_sections_skipped() {
        let store = MemoryStore::new(FRAGMENT, TEMPLATE);
        let builder = ArchiveBuilder::new();

        let content = builder.build(&store, &version("v1.6.0")).unwrap();

        // "### Feature Updates" has a blank-only body in the fragment
        assert!(!content.contains("### Feature Updates"));
    }

    #[test]
    fn test_fragment_reset_after_build() {
        let store = MemoryStore::new(FRAGMENT, TEMPLATE);
        let builder = ArchiveBuilder::new();

        builder.build(&store, &version("v1.6.0")).unwrap();

        assert_eq!(store.fragment(), TEMPLATE);
    }

    #[test]
    fn test_rebuild_from_reset_fragment_is_title_only() {
        let store = MemoryStore::new(FRAGMENT, TEMPLATE);
        let builder = ArchiveBuilder::new();

        builder.build(&store, &version("v1.6.0")).unwrap();
        // Second run consumes the template: every section is empty
        let content = builder.build(&store, &version("v1.6.1")).unwrap();

        assert_eq!(content, "## Changelog v1.6.1\n\n");
        assert_eq!(store.fragment(), TEMPLATE);
    }

    #[test]
    fn test_section_order_preserved() {
        let store = MemoryStore::new(
            "### Bugfixes\n- b\n\n### New Features\n- a\n",
            TEMPLATE,
        );
        let builder = ArchiveBuilder::new();

        let content = builder.build(&store, &version("v2.0.0")).unwrap();

        let fixes = content.find("### Bugfixes").unwrap();
        let features = content.find("### New Features").unwrap();
        assert!(fixes < features);
    }
}
