//! Read-only repository queries
//!
//! Everything that mutates the repository (staging, committing, tagging,
//! pushing) goes through [crate::runner::CommandRunner]. This module only
//! answers questions about the repository: where its work tree is, which
//! branch is checked out and whether a tag name is taken.
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::path::Path;

use crate::error::Result;

/// Repository queries needed by a release run
pub trait Repository {
    /// Root of the work tree; the project root for locating the version file
    fn workdir(&self) -> &Path;

    /// Short name of the checked-out branch (e.g., "main")
    ///
    /// Returns "HEAD" when detached.
    fn current_branch(&self) -> Result<String>;

    /// Whether `refs/tags/<tag_name>` exists
    ///
    /// Handles both lightweight and annotated tags. Has no side effects.
    fn tag_exists(&self, tag_name: &str) -> Result<bool>;
}
