use std::path::PathBuf;

use super::BumpKind;

/// Resolved configuration for a single run
///
/// Built once from the command line and never modified afterwards. This
/// decoupling allows the release workflow to be driven programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseIntent {
    /// Which component to increment
    pub bump: BumpKind,

    /// Compute and print everything, mutate nothing
    pub dry_run: bool,

    /// Commit/tag message override
    pub message: Option<String>,

    /// Run the publish command after tagging
    pub publish: bool,

    /// Directory the project root is resolved from
    pub root: PathBuf,

    /// Explicit configuration file
    pub config_path: Option<PathBuf>,
}

impl ReleaseIntent {
    /// Intent with defaults (revision bump, no dry-run) for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ReleaseIntent {
            bump: BumpKind::default(),
            dry_run: false,
            message: None,
            publish: false,
            root: root.into(),
            config_path: None,
        }
    }

    /// Message used for both the commit and the annotated tag
    pub fn effective_message(&self) -> &str {
        match self.message.as_deref() {
            Some(msg) if !msg.trim().is_empty() => msg,
            _ => self.bump.default_message(),
        }
    }
}
