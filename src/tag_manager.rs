//! Commit, tag and push for one release.
//!
//! A run moves through `Init -> Checked -> {Created | AlreadyExists}`. The
//! existence check always happens before anything is staged, so an existing
//! tag is never moved or overwritten.

use crate::domain::{BumpKind, Tag, Version};
use crate::error::{BumpError, Result};
use crate::git::Repository;
use crate::runner::CommandRunner;

/// Where the tag protocol stands for this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagState {
    Init,
    Checked,
    Created,
    AlreadyExists,
}

/// Drives the git side of a release
pub struct TagManager<'a, R: Repository + ?Sized, C: CommandRunner + ?Sized> {
    repo: &'a R,
    runner: &'a C,
    remote: String,
    state: TagState,
}

impl<'a, R: Repository + ?Sized, C: CommandRunner + ?Sized> TagManager<'a, R, C> {
    pub fn new(repo: &'a R, runner: &'a C, remote: impl Into<String>) -> Self {
        TagManager {
            repo,
            runner,
            remote: remote.into(),
            state: TagState::Init,
        }
    }

    pub fn state(&self) -> TagState {
        self.state
    }

    /// Whether `tag_name` is already taken. Never mutates anything.
    pub fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        self.repo.tag_exists(tag_name)
    }

    /// Commit the working tree and cut the tag for `version`
    ///
    /// 1. Fails with `TagAlreadyExists` if the tag is taken.
    /// 2. Outside dry-run: `git add -A`, `git commit`, `git push <remote> HEAD`,
    ///    `git tag -a`, `git push <remote> <tag>`.
    /// 3. In dry-run nothing is run; the would-be tag is returned.
    ///
    /// `message` is used for both the commit and the annotated tag. A failing
    /// git command is returned as is; nothing is rolled back.
    pub fn create_release(
        &mut self,
        version: &Version,
        bump: BumpKind,
        message: &str,
        dry_run: bool,
    ) -> Result<Tag> {
        let tag = Tag::for_version(version);

        if self.state == TagState::Created || self.tag_exists(tag.as_str())? {
            self.state = TagState::AlreadyExists;
            return Err(BumpError::TagAlreadyExists { tag: tag.name });
        }
        self.state = TagState::Checked;

        if dry_run {
            tracing::debug!(%tag, "dry run, not tagging");
            return Ok(tag);
        }

        let cwd = self.repo.workdir();

        self.git(&["add", "-A"])?;
        // An unchanged version leaves nothing to commit
        if bump == BumpKind::NoChange {
            self.git(&["commit", "--allow-empty", "-m", message])?;
        } else {
            self.git(&["commit", "-m", message])?;
        }
        self.git(&["push", self.remote.as_str(), "HEAD"])?;
        self.git(&["tag", "-a", tag.as_str(), "-m", message])?;
        self.git(&["push", self.remote.as_str(), tag.as_str()])?;

        tracing::info!(%tag, cwd = %cwd.display(), "tag created and pushed");
        self.state = TagState::Created;
        Ok(tag)
    }

    fn git(&self, args: &[&str]) -> Result<()> {
        self.runner.run(self.repo.workdir(), "git", args)?;
        Ok(())
    }
}
