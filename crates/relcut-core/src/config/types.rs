//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level relcut configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog file layout
    pub changelog: ChangelogConfig,

    /// Release notes generation
    pub notes: NotesConfig,
}

/// Changelog file layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Directory holding the fragment, template and archive files
    pub dir: PathBuf,

    /// Working fragment file name, relative to `dir`
    pub fragment_file: String,

    /// Default template file name, relative to `dir`
    pub template_file: String,

    /// Path to the project manifest carrying the version field
    pub manifest: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("docs/changelogs"),
            fragment_file: "latest.md".to_string(),
            template_file: "default.md".to_string(),
            manifest: PathBuf::from("manifest.json"),
        }
    }
}

/// Release notes generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Headings kept when detailed mode is off
    pub feature_headings: Vec<String>,

    /// Headings dropped from the notes in every mode
    pub excluded_headings: Vec<String>,

    /// Heading the translator note points readers at
    pub translation_heading: String,

    /// Base URL prepended to archive links
    pub base_url: String,

    /// Default output path for the generated notes
    pub output: PathBuf,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            feature_headings: vec![
                "### New Features".to_string(),
                "### Feature Updates".to_string(),
            ],
            excluded_headings: vec![
                "### Translation Changes".to_string(),
                "### Development Chores".to_string(),
            ],
            translation_heading: "### Translation Changes".to_string(),
            base_url: "https://github.com/example/project/blob/main/docs/changelogs".to_string(),
            output: PathBuf::from("temp_notes.md"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.changelog.fragment_file, "latest.md");
        assert_eq!(config.changelog.template_file, "default.md");
        assert_eq!(config.notes.feature_headings.len(), 2);
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let config = Config::default();
        let rendered = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.changelog.fragment_file, config.changelog.fragment_file);
        assert_eq!(parsed.notes.base_url, config.notes.base_url);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("[changelog]\nfragment_file = \"next.md\"").unwrap();
        assert_eq!(parsed.changelog.fragment_file, "next.md");
        assert_eq!(parsed.changelog.template_file, "default.md");
    }
}
