//! Project manifest handling
//!
//! The manifest is the JSON document the project itself ships (e.g. a mod
//! or package manifest) whose `Version` field is the canonical version.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ManifestError, Result};

/// Project manifest structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Canonical version, a bare semver string without the `v` prefix
    #[serde(rename = "Version")]
    pub version: String,

    /// Project name
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Preserve other fields
    #[serde(flatten)]
    pub other: HashMap<String, serde_json::Value>,
}

impl ProjectManifest {
    /// Load the manifest from path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| ManifestError::NotFound(path.to_path_buf()))?;

        let manifest: Self = serde_json::from_str(&content)
            .map_err(|e| ManifestError::ParseError(e.to_string()))?;

        if manifest.version.is_empty() {
            return Err(ManifestError::MissingVersion(path.to_path_buf()).into());
        }

        debug!(path = %path.display(), version = %manifest.version, "manifest loaded");
        Ok(manifest)
    }

    /// The version identifier derived from the manifest (`v` prefixed)
    pub fn version_tag(&self) -> String {
        format!("v{}", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        std::fs::write(
            &path,
            r#"{"Name": "Example", "Version": "1.6.0", "Author": "someone"}"#,
        )
        .unwrap();

        let manifest = ProjectManifest::load(&path).unwrap();
        assert_eq!(manifest.version, "1.6.0");
        assert_eq!(manifest.name.as_deref(), Some("Example"));
        assert_eq!(manifest.version_tag(), "v1.6.0");
        assert!(manifest.other.contains_key("Author"));
    }

    #[test]
    fn test_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let result = ProjectManifest::load(&temp.path().join("manifest.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(ProjectManifest::load(&path).is_err());
    }

    #[test]
    fn test_empty_version_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        std::fs::write(&path, r#"{"Version": ""}"#).unwrap();

        assert!(ProjectManifest::load(&path).is_err());
    }
}
