use crate::error::Result;
use crate::git::Repository;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    workdir: PathBuf,
    branch: String,
    tags: HashSet<String>,
}

impl MockRepository {
    /// Create a mock repository rooted at `workdir` on branch "main"
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        MockRepository {
            workdir: workdir.into(),
            branch: "main".to_string(),
            tags: HashSet::new(),
        }
    }

    /// Add an existing tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.insert(name.into());
    }

    /// Set the checked-out branch
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }
}

impl Repository for MockRepository {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn current_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        Ok(self.tags.contains(tag_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::new("/work/foo");
        repo.add_tag("v1.0.0");

        assert!(repo.tag_exists("v1.0.0").unwrap());
        assert!(!repo.tag_exists("v2.0.0").unwrap());
    }

    #[test]
    fn test_mock_repository_branch() {
        let mut repo = MockRepository::new("/work/foo");
        assert_eq!(repo.current_branch().unwrap(), "main");

        repo.set_branch("release");
        assert_eq!(repo.current_branch().unwrap(), "release");
        assert_eq!(repo.workdir(), Path::new("/work/foo"));
    }
}
