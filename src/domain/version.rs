use crate::error::{BumpError, Result};
use std::fmt;

/// Version triple as declared in the version file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, revision: u32) -> Self {
        Version {
            major,
            minor,
            revision,
        }
    }

    /// Parse a version literal (e.g., "1.2.3" -> Version(1,2,3))
    ///
    /// Exactly three dot-separated segments of plain decimal digits. Signs and
    /// leading zeros are rejected so the literal always prints back unchanged,
    /// and `u32::MAX` is rejected because it cannot be incremented.
    pub fn parse(value: &str) -> Result<Self> {
        let parts: Vec<&str> = value.split('.').collect();

        let mut numbers = [0u32; 3];
        for (slot, (part, name)) in numbers
            .iter_mut()
            .zip(parts.iter().zip(["major", "minor", "revision"]))
        {
            *slot = parse_segment(part).ok_or_else(|| {
                BumpError::version(format!("Invalid {} component '{}' in '{}'", name, part, value))
            })?;
        }

        if parts.len() != 3 {
            return Err(BumpError::version(format!(
                "'{}' has {} segment(s) - expected MAJOR.MINOR.REVISION",
                value,
                parts.len()
            )));
        }

        Ok(Version::new(numbers[0], numbers[1], numbers[2]))
    }

    /// Compute the next version for the given bump kind
    ///
    /// Components saturate at `u32::MAX` instead of wrapping.
    pub fn bump(&self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => Version::new(self.major.saturating_add(1), 0, 0),
            BumpKind::Minor => Version::new(self.major, self.minor.saturating_add(1), 0),
            BumpKind::Revision => {
                Version::new(self.major, self.minor, self.revision.saturating_add(1))
            }
            BumpKind::NoChange => *self,
        }
    }
}

/// "0" or digits without a leading zero, below `u32::MAX`
fn parse_segment(part: &str) -> Option<u32> {
    let canonical = part == "0"
        || (part.bytes().all(|b| b.is_ascii_digit()) && !part.starts_with('0') && !part.is_empty());
    if !canonical {
        return None;
    }
    part.parse::<u32>().ok().filter(|n| *n < u32::MAX)
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

/// Which component of the version to increment on this run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Revision,
    NoChange,
}

impl BumpKind {
    /// Commit and tag message used when the user supplies none
    pub fn default_message(&self) -> &'static str {
        match self {
            BumpKind::Major => "major version increment",
            BumpKind::Minor => "minor version increment",
            BumpKind::Revision => "revision increment",
            BumpKind::NoChange => "creating tag for version",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Revision => "revision",
            BumpKind::NoChange => "none",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.revision, 3);
    }

    #[test]
    fn test_version_parse_rejects_wrong_segment_count() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
    }

    #[test]
    fn test_version_parse_rejects_non_numeric() {
        let err = Version::parse("1.x.3").unwrap_err();
        assert!(matches!(err, BumpError::InvalidVersionFormat(_)));
        assert!(err.to_string().contains("minor"));

        assert!(Version::parse("1.2.3.beta").is_err());
        assert!(Version::parse("").is_err());
        assert!(Version::parse("-1.2.3").is_err());
    }

    #[test]
    fn test_version_parse_rejects_non_canonical_digits() {
        for value in ["+1.2.3", "01.2.3", "1.2.03", "1.00.3", "1. 2.3", "1.2.3 "] {
            let err = Version::parse(value).unwrap_err();
            assert!(matches!(err, BumpError::InvalidVersionFormat(_)), "{}", value);
        }
        assert_eq!(Version::parse("0.0.0").unwrap(), Version::new(0, 0, 0));
        assert_eq!(Version::parse("10.200.3000").unwrap(), Version::new(10, 200, 3000));
    }

    #[test]
    fn test_version_parse_rejects_components_that_cannot_grow() {
        assert!(Version::parse("4294967295.0.0").is_err());
        assert!(Version::parse("1.4294967295.0").is_err());
        assert!(Version::parse("1.2.4294967296").is_err());
        assert_eq!(
            Version::parse("4294967294.0.0").unwrap().bump(BumpKind::Major),
            Version::new(u32::MAX, 0, 0)
        );
    }

    #[test]
    fn test_bump_never_wraps() {
        let v = Version::new(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(v.bump(BumpKind::Major).major, u32::MAX);
        assert_eq!(v.bump(BumpKind::Minor).minor, u32::MAX);
        assert_eq!(v.bump(BumpKind::Revision).revision, u32::MAX);
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(BumpKind::Major), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(BumpKind::Minor), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_revision() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(BumpKind::Revision), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_none_is_identity() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(BumpKind::NoChange), v);
    }

    #[test]
    fn test_bump_laws_over_a_grid() {
        for major in 0..4 {
            for minor in 0..4 {
                for revision in 0..4 {
                    let v = Version::new(major, minor, revision);

                    let m = v.bump(BumpKind::Major);
                    assert_eq!((m.major, m.minor, m.revision), (major + 1, 0, 0));

                    let n = v.bump(BumpKind::Minor);
                    assert_eq!((n.major, n.minor, n.revision), (major, minor + 1, 0));

                    let r = v.bump(BumpKind::Revision);
                    assert_eq!((r.major, r.minor, r.revision), (major, minor, revision + 1));
                }
            }
        }
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
    }

    #[test]
    fn test_default_bump_is_revision() {
        assert_eq!(BumpKind::default(), BumpKind::Revision);
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(BumpKind::Major.default_message(), "major version increment");
        assert_eq!(BumpKind::Minor.default_message(), "minor version increment");
        assert_eq!(BumpKind::Revision.default_message(), "revision increment");
        assert_eq!(BumpKind::NoChange.default_message(), "creating tag for version");
    }
}
