//! Changelog document types

use serde::{Deserialize, Serialize};

/// A section in a changelog document
///
/// Holds the heading line and every raw line beneath it, blank lines
/// included, up to the next heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading line, e.g. `### New Features`
    pub heading: String,
    /// Raw body lines in file order
    pub lines: Vec<String>,
}

impl Section {
    /// Create a new section
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
        }
    }

    /// Append a raw line to the body
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Body lines with leading and trailing blank lines stripped
    pub fn body(&self) -> &[String] {
        let start = self
            .lines
            .iter()
            .position(|l| !l.trim().is_empty())
            .unwrap_or(self.lines.len());
        let end = self
            .lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(start, |i| i + 1);
        &self.lines[start..end]
    }

    /// Check if the section carries no content lines
    pub fn is_empty(&self) -> bool {
        self.body().is_empty()
    }
}

/// An ordered changelog document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Sections in first-seen heading order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Find a section by its exact heading
    pub fn get(&self, heading: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.heading == heading)
    }

    /// Check if the document has no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Append a line to the section with this heading, creating it if new.
    ///
    /// A repeated heading keeps its first position; later bodies append.
    pub fn section_mut(&mut self, heading: &str) -> &mut Section {
        let i = match self.sections.iter().position(|s| s.heading == heading) {
            Some(i) => i,
            None => {
                self.sections.push(Section::new(heading));
                self.sections.len() - 1
            }
        };
        &mut self.sections[i]
    }

    /// Reassemble the document verbatim: heading lines and raw bodies in order
    pub fn render(&self) -> String {
        let mut output = String::new();
        for section in &self.sections {
            output.push_str(&section.heading);
            output.push('\n');
            for line in &section.lines {
                output.push_str(line);
                output.push('\n');
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_strips_surrounding_blanks() {
        let mut section = Section::new("### New Features");
        section.push_line("");
        section.push_line("- one");
        section.push_line("");
        section.push_line("- two");
        section.push_line("");

        assert_eq!(section.body(), ["- one", "", "- two"]);
        assert!(!section.is_empty());
    }

    #[test]
    fn test_blank_only_body_is_empty() {
        let mut section = Section::new("### Feature Updates");
        section.push_line("");
        section.push_line("   ");

        assert!(section.body().is_empty());
        assert!(section.is_empty());
    }

    #[test]
    fn test_duplicate_heading_appends() {
        let mut doc = Document::new();
        doc.section_mut("### Bugfixes").push_line("- first");
        doc.section_mut("### New Features").push_line("- feature");
        doc.section_mut("### Bugfixes").push_line("- second");

        assert_eq!(doc.sections().len(), 2);
        assert_eq!(doc.sections()[0].heading, "### Bugfixes");
        assert_eq!(doc.sections()[0].lines, ["- first", "- second"]);
    }
}
