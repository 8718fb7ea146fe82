use crate::error::{BumpError, Result};
use git2::{ErrorCode, Repository as Git2Repo};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    workdir: PathBuf,
}

impl Git2Repository {
    /// Discover the repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                BumpError::RepositoryNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                BumpError::Git(e)
            }
        })?;

        Self::from_git2(repo)
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Result<Self> {
        let workdir = repo
            .workdir()
            .map(|dir| dir.components().collect::<PathBuf>())
            .ok_or_else(|| BumpError::config("Bare repositories have no version file to bump"))?;

        Ok(Git2Repository { repo, workdir })
    }
}

impl super::Repository for Git2Repository {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn current_branch(&self) -> Result<String> {
        if self.repo.head_detached()? {
            return Ok("HEAD".to_string());
        }

        match self.repo.head() {
            Ok(head) => Ok(head.shorthand().unwrap_or("HEAD").to_string()),
            // Unborn branch: HEAD names a branch with no commits yet
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                let target = head.symbolic_target().unwrap_or("HEAD");
                Ok(target.trim_start_matches("refs/heads/").to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        let reference_name = format!("refs/tags/{}", tag_name);

        match self.repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) if e.code() == ErrorCode::InvalidSpec => Err(BumpError::config(format!(
                "'{}' is not a valid tag name",
                tag_name
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
