//! Version identifiers and pre-release sequencing
//!
//! Archive identifiers look like `v1.6.0` or `v1.6.0-beta.1`. Ordering is
//! always semantic: identifiers are parsed into semver components after
//! stripping the `v` prefix and any `.md` file extension. Raw string sort
//! would put `v1.6.0-beta.1` after `v1.6.0` and `v1.10.0` before `v1.9.0`.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;
use tracing::{debug, warn};

use relcut_core::error::{Result, VersionError};

/// Regex for the `<label>.<number>` pre-release form
static PRERELEASE_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<label>[A-Za-z]+)\.(?P<number>\d+)$").expect("Invalid regex")
});

/// A parsed version identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionId {
    raw: String,
    version: Version,
}

impl VersionId {
    /// Parse an identifier such as `v1.6.0`, `1.6.0-rc.2` or `v1.6.0-beta.1.md`
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let stem = trimmed.strip_suffix(".md").unwrap_or(trimmed);
        let bare = stem.strip_prefix('v').unwrap_or(stem);

        let version = Version::parse(bare)
            .map_err(|e| VersionError::ParseFailed(input.to_string(), e.to_string()))?;

        Ok(Self {
            raw: format!("v{version}"),
            version,
        })
    }

    /// Normalized identifier, `v` prefixed
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Archive file name for this identifier
    pub fn archive_file(&self) -> String {
        format!("{}.md", self.raw)
    }

    /// Check if this is a pre-release version
    pub fn is_prerelease(&self) -> bool {
        !self.version.pre.is_empty()
    }

    /// The base release this version belongs to
    pub fn base(&self) -> (u64, u64, u64) {
        (self.version.major, self.version.minor, self.version.patch)
    }

    /// Display title for a pre-release, e.g. "Alpha 1" or "Release Candidate 2".
    ///
    /// Returns `None` for a non-pre-release version. A pre-release part that
    /// does not match `<label>.<number>` is rendered title-cased as-is
    /// instead of silently producing an empty title.
    pub fn prerelease_title(&self) -> Option<String> {
        if !self.is_prerelease() {
            return None;
        }

        let pre = self.version.pre.as_str();
        match PRERELEASE_TAG_REGEX.captures(pre) {
            Some(caps) => {
                let label = &caps["label"];
                let number = &caps["number"];
                let title = if label.eq_ignore_ascii_case("rc") {
                    "Release Candidate".to_string()
                } else {
                    title_case(label)
                };
                Some(format!("{title} {number}"))
            }
            None => {
                warn!(prerelease = pre, "unrecognized pre-release tag");
                Some(title_case(pre))
            }
        }
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialOrd for VersionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }
}

/// First character uppercased, rest lowercased
fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Resolve the pre-release train immediately preceding `version`.
///
/// Sorts the known archive identifiers ascending (synthesizing `version`
/// itself when its archive does not exist yet), then walks backward from
/// `version`, collecting pre-releases of the same base version and stopping
/// at the first identifier that is a final release or belongs to a
/// different base. The result is in ascending order.
pub fn preceding_prereleases(version: &VersionId, archive_ids: &[String]) -> Vec<VersionId> {
    let mut known: Vec<VersionId> = Vec::new();

    for id in archive_ids {
        match VersionId::parse(id) {
            Ok(v) => known.push(v),
            Err(_) => warn!(id = %id, "skipping archive with unparsable version"),
        }
    }

    if !known.contains(version) {
        known.push(version.clone());
    }
    known.sort();

    let Some(position) = known.iter().position(|v| v == version) else {
        return Vec::new();
    };

    let mut train: Vec<VersionId> = known[..position]
        .iter()
        .rev()
        .take_while(|v| v.is_prerelease() && v.base() == version.base())
        .cloned()
        .collect();
    train.reverse();

    debug!(version = %version, count = train.len(), "pre-release train resolved");
    train
}
