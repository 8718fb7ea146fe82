//! Finding the version declaration file under a project root.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BumpError, Result};

/// Placeholder replaced by the root directory's name in candidate paths
pub const PROJECT_NAME: &str = "<project-name>";

/// Built-in candidates, probed in order after any configured ones
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "version.rb",
    "lib/<project-name>/version.rb",
    "config/version.rb",
];

static DRIVE_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]):(?:[\\/](.*))?$").expect("drive pattern"));

static MOUNT_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:mnt/|cygdrive/)?([A-Za-z])(?:/(.*))?$").expect("mount pattern")
});

/// Equivalent spellings of `root` across path conventions.
///
/// A Windows drive path (`C:\src\foo`) is also reachable as `/c/src/foo`
/// from MSYS shells, `/mnt/c/src/foo` from WSL and `/cygdrive/c/src/foo`
/// from Cygwin, and the other way around. The original string always comes
/// first; other roots yield only themselves.
pub fn path_variants(root: &str) -> Vec<String> {
    let mut variants = vec![root.to_string()];

    let captures = DRIVE_FORM
        .captures(root)
        .or_else(|| MOUNT_FORM.captures(root));

    if let Some(caps) = captures {
        let letter = &caps[1];
        let rest = caps
            .get(2)
            .map(|m| m.as_str().replace('\\', "/"))
            .unwrap_or_default();
        let rest = rest.trim_end_matches('/');
        let tail = if rest.is_empty() {
            String::new()
        } else {
            format!("/{}", rest)
        };

        let upper = letter.to_ascii_uppercase();
        let lower = letter.to_ascii_lowercase();
        let drive = if tail.is_empty() {
            format!("{}:/", upper)
        } else {
            format!("{}:{}", upper, tail)
        };

        for candidate in [
            drive,
            format!("/{}{}", lower, tail),
            format!("/mnt/{}{}", lower, tail),
            format!("/cygdrive/{}{}", lower, tail),
        ] {
            if !variants.contains(&candidate) {
                variants.push(candidate);
            }
        }
    }

    variants
}

/// Searches a project root for the version declaration file
#[derive(Debug, Clone)]
pub struct VersionFileLocator {
    candidates: Vec<String>,
}

impl VersionFileLocator {
    /// Locator probing only the built-in candidates
    pub fn new() -> Self {
        Self::with_candidates(&[])
    }

    /// Locator probing `extra` before the built-in candidates
    pub fn with_candidates(extra: &[String]) -> Self {
        let mut candidates: Vec<String> = Vec::new();
        for candidate in extra
            .iter()
            .map(String::as_str)
            .chain(DEFAULT_CANDIDATES.iter().copied())
        {
            if !candidates.iter().any(|c| c == candidate) {
                candidates.push(candidate.to_string());
            }
        }
        VersionFileLocator { candidates }
    }

    /// Relative candidate paths with the project name filled in
    pub fn candidates_for(&self, root: &Path) -> Vec<PathBuf> {
        let project = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.candidates
            .iter()
            .map(|c| PathBuf::from(c.replace(PROJECT_NAME, &project)))
            .collect()
    }

    /// First candidate that exists as a regular file, across all root variants
    pub fn locate(&self, root: &Path) -> Result<PathBuf> {
        let relative = self.candidates_for(root);
        let mut probed = Vec::new();

        let variants = path_variants(&root.to_string_lossy());
        for (i, variant) in variants.iter().enumerate() {
            let base = if i == 0 {
                root.to_path_buf()
            } else {
                PathBuf::from(variant)
            };

            for rel in &relative {
                let candidate = base.join(rel);
                tracing::debug!(path = %candidate.display(), "probing for version file");
                if candidate.is_file() {
                    return Ok(candidate);
                }
                probed.push(candidate.display().to_string());
            }
        }

        Err(BumpError::VersionFileNotFound {
            root: root.to_path_buf(),
            probed,
        })
    }
}

impl Default for VersionFileLocator {
    fn default() -> Self {
        Self::new()
    }
}
