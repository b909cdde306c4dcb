//! Changelog store abstraction
//!
//! The fragment file, template file and archive directory are the only
//! mutable state in the system. They sit behind [`ChangelogStore`] so the
//! builder and composer logic can be driven against [`MemoryStore`] in
//! tests and [`DirStore`] in the CLI.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ChangelogConfig;
use crate::error::{ChangelogError, Result};

/// Access to the changelog files of a project
pub trait ChangelogStore {
    /// Contents of the working fragment
    fn read_fragment(&self) -> Result<String>;

    /// Contents of the default template
    fn read_template(&self) -> Result<String>;

    /// Contents of an archive by identifier
    fn read_archive(&self, id: &str) -> Result<String>;

    /// Create or overwrite the archive for an identifier
    fn write_archive(&self, id: &str, content: &str) -> Result<()>;

    /// Identifiers (file name minus extension) of all archives present, unordered
    fn archive_ids(&self) -> Result<Vec<String>>;

    /// Overwrite the fragment with the template contents
    fn reset_fragment(&self) -> Result<()>;
}

/// Changelog store over a flat directory of markdown files
pub struct DirStore {
    dir: PathBuf,
    fragment_file: String,
    template_file: String,
}

impl DirStore {
    /// Create a store over a directory with the default file names
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fragment_file: "latest.md".to_string(),
            template_file: "default.md".to_string(),
        }
    }

    /// Create a store from configuration, resolving `changelog.dir` against `root`
    pub fn from_config(root: &Path, config: &ChangelogConfig) -> Self {
        Self {
            dir: root.join(&config.dir),
            fragment_file: config.fragment_file.clone(),
            template_file: config.template_file.clone(),
        }
    }

    /// Directory holding the changelog files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the working fragment
    pub fn fragment_path(&self) -> PathBuf {
        self.dir.join(&self.fragment_file)
    }

    /// Path of the default template
    pub fn template_path(&self) -> PathBuf {
        self.dir.join(&self.template_file)
    }

    /// Path of an archive by identifier
    pub fn archive_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.md"))
    }
}

/// Archive file names start with `v` followed by a digit
fn looks_like_archive(stem: &str) -> bool {
    let mut chars = stem.chars();
    chars.next() == Some('v') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

impl ChangelogStore for DirStore {
    fn read_fragment(&self) -> Result<String> {
        let path = self.fragment_path();
        std::fs::read_to_string(&path)
            .map_err(|_| ChangelogError::FragmentNotFound(path).into())
    }

    fn read_template(&self) -> Result<String> {
        let path = self.template_path();
        std::fs::read_to_string(&path)
            .map_err(|_| ChangelogError::TemplateNotFound(path).into())
    }

    fn read_archive(&self, id: &str) -> Result<String> {
        std::fs::read_to_string(self.archive_path(id))
            .map_err(|_| ChangelogError::ArchiveNotFound(id.to_string()).into())
    }

    fn write_archive(&self, id: &str, content: &str) -> Result<()> {
        let path = self.archive_path(id);
        std::fs::write(&path, content)
            .map_err(|e| ChangelogError::WriteFailed(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "archive written");
        Ok(())
    }

    fn archive_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();

        for entry in std::fs::read_dir(&self.dir).map_err(ChangelogError::Io)? {
            let entry = entry.map_err(ChangelogError::Io)?;
            let path = entry.path();

            if !path.extension().is_some_and(|e| e == "md") {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            if looks_like_archive(stem) {
                ids.push(stem.to_string());
            }
        }

        debug!(count = ids.len(), "archives listed");
        Ok(ids)
    }

    fn reset_fragment(&self) -> Result<()> {
        let template = self.read_template()?;
        let path = self.fragment_path();
        std::fs::write(&path, template)
            .map_err(|e| ChangelogError::WriteFailed(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "fragment reset to template");
        Ok(())
    }
}

/// In-memory changelog store for tests
pub struct MemoryStore {
    fragment: RefCell<String>,
    template: String,
    archives: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create a store with the given fragment and template contents
    pub fn new(fragment: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            fragment: RefCell::new(fragment.into()),
            template: template.into(),
            archives: RefCell::new(BTreeMap::new()),
        }
    }

    /// Seed an archive
    pub fn with_archive(self, id: impl Into<String>, content: impl Into<String>) -> Self {
        self.archives.borrow_mut().insert(id.into(), content.into());
        self
    }

    /// Current fragment contents
    pub fn fragment(&self) -> String {
        self.fragment.borrow().clone()
    }

    /// Contents of an archive, if present
    pub fn archive(&self, id: &str) -> Option<String> {
        self.archives.borrow().get(id).cloned()
    }
}

impl ChangelogStore for MemoryStore {
    fn read_fragment(&self) -> Result<String> {
        Ok(self.fragment.borrow().clone())
    }

    fn read_template(&self) -> Result<String> {
        Ok(self.template.clone())
    }

    fn read_archive(&self, id: &str) -> Result<String> {
        self.archives
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| ChangelogError::ArchiveNotFound(id.to_string()).into())
    }

    fn write_archive(&self, id: &str, content: &str) -> Result<()> {
        self.archives
            .borrow_mut()
            .insert(id.to_string(), content.to_string());
        Ok(())
    }

    fn archive_ids(&self) -> Result<Vec<String>> {
        Ok(self.archives.borrow().keys().cloned().collect())
    }

    fn reset_fragment(&self) -> Result<()> {
        *self.fragment.borrow_mut() = self.template.clone();
        Ok(())
    }
}
