use std::fmt;

use super::Version;

const TAG_PREFIX: &str = "v";

/// Represents a release tag (always `v{major}.{minor}.{revision}`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Tag name for a version (e.g., Version(1,2,3) -> "v1.2.3")
    pub fn for_version(version: &Version) -> Self {
        Tag {
            name: format!("{}{}", TAG_PREFIX, version),
        }
    }

    /// Name as passed to git
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Full reference path under `refs/tags/`
    pub fn reference(&self) -> String {
        format!("refs/tags/{}", self.name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
