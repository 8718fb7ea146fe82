use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for git-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("No git repository found at or above '{}'", path.display())]
    RepositoryNotFound { path: PathBuf },

    #[error(
        "No version file found under '{}' (looked for: {})",
        root.display(),
        probed.join(", ")
    )]
    VersionFileNotFound { root: PathBuf, probed: Vec<String> },

    #[error("Malformed version file '{}': {reason}", path.display())]
    MalformedVersionFile { path: PathBuf, reason: String },

    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Tag '{tag}' already exists")]
    TagAlreadyExists { tag: String },

    #[error("Command `{command}` failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Could not run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a version format error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::InvalidVersionFormat(msg.into())
    }

    /// Create a malformed version file error for `path`
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        BumpError::MalformedVersionFile {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for the expected "tag was already cut" outcome.
    ///
    /// Callers report this one with a plain message rather than as a failure.
    pub fn is_tag_collision(&self) -> bool {
        matches!(self, BumpError::TagAlreadyExists { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BumpError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_tag_collision_is_classified() {
        let err = BumpError::TagAlreadyExists {
            tag: "v1.2.3".to_string(),
        };
        assert!(err.is_tag_collision());
        assert_eq!(err.to_string(), "Tag 'v1.2.3' already exists");

        assert!(!BumpError::version("1.x.3").is_tag_collision());
    }

    #[test]
    fn test_version_file_not_found_lists_probed_paths() {
        let err = BumpError::VersionFileNotFound {
            root: PathBuf::from("/work/foo"),
            probed: vec![
                "/work/foo/version.rb".to_string(),
                "/work/foo/config/version.rb".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("/work/foo/version.rb"));
        assert!(msg.contains("/work/foo/config/version.rb"));
    }

    #[test]
    fn test_malformed_mentions_path_and_reason() {
        let err = BumpError::malformed("lib/foo/version.rb", "missing closing 'end'");
        let msg = err.to_string();
        assert!(msg.starts_with("Malformed version file"));
        assert!(msg.contains("lib/foo/version.rb"));
        assert!(msg.contains("missing closing 'end'"));
    }

    #[test]
    fn test_command_failed_message() {
        let err = BumpError::CommandFailed {
            command: "git push origin v1.0.0".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "rejected".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("git push origin v1.0.0"));
        assert!(msg.contains("rejected"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumpError::config("x"), "Configuration error"),
            (BumpError::version("x"), "Invalid version format"),
            (
                BumpError::RepositoryNotFound {
                    path: PathBuf::from("/tmp"),
                },
                "No git repository found",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
