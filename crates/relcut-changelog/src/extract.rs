//! Changelog fragment extraction
//!
//! Splits heading-delimited markdown into an ordered [`Document`]. A `###`
//! heading line opens a section; every other line belongs verbatim to the
//! section open at that point. Lines before the first heading are dropped.

use tracing::{debug, instrument};

use crate::types::Document;

/// Heading marker that delimits changelog sections
const HEADING_MARKER: &str = "### ";

/// Check whether a line is a section heading
fn is_heading(line: &str) -> bool {
    line.starts_with(HEADING_MARKER)
}

/// Extract an ordered document from changelog-formatted text
#[instrument(skip(text), fields(len = text.len()))]
pub fn extract(text: &str) -> Document {
    let mut doc = Document::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if is_heading(line) {
            // Opening an existing heading again appends to its body
            doc.section_mut(line);
            current = Some(line.to_string());
        } else if let Some(heading) = &current {
            doc.section_mut(heading).push_line(line);
        }
        // Lines before the first heading are discarded
    }

    debug!(sections = doc.sections().len(), "document extracted");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = "\
### New Features

- Added the tile viewer.
- Added warp announcements.

### Bugfixes

- Fixed crash when opening the map.

### Translation Changes

- Updated `menu.title`.
";

    #[test]
    fn test_sections_in_file_order() {
        let doc = extract(FRAGMENT);

        let headings: Vec<_> = doc.sections().iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            ["### New Features", "### Bugfixes", "### Translation Changes"]
        );
    }

    #[test]
    fn test_body_lines_kept_verbatim() {
        let doc = extract(FRAGMENT);

        let features = doc.get("### New Features").unwrap();
        assert_eq!(
            features.lines,
            ["", "- Added the tile viewer.", "- Added warp announcements.", ""]
        );
    }

    #[test]
    fn test_roundtrip_is_verbatim() {
        let doc = extract(FRAGMENT);
        assert_eq!(doc.render(), FRAGMENT);
    }

    #[test]
    fn test_lines_before_first_heading_dropped() {
        let doc = extract("## Changelog v1.6.0\n\npreamble\n\n### New Features\n- thing\n");

        assert_eq!(doc.sections().len(), 1);
        assert_eq!(doc.sections()[0].heading, "### New Features");
        assert_eq!(doc.sections()[0].lines, ["- thing"]);
    }

    #[test]
    fn test_heading_with_no_body_preserved() {
        let doc = extract("### New Features\n### Bugfixes\n- fix\n");

        let features = doc.get("### New Features").unwrap();
        assert!(features.lines.is_empty());
        assert!(features.is_empty());
    }

    #[test]
    fn test_duplicate_headings_concatenate() {
        let doc = extract("### Bugfixes\n- a\n### New Features\n- f\n### Bugfixes\n- b\n");

        let fixes = doc.get("### Bugfixes").unwrap();
        assert_eq!(fixes.lines, ["- a", "- b"]);
        assert_eq!(doc.sections().len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let doc = extract("");
        assert!(doc.is_empty());
    }
}
