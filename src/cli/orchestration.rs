//! Main workflow orchestration logic
//!
//! Wires locator, codec, bumper and tag manager into one release run. Kept
//! apart from `main.rs` so the workflow can be driven with a mock repository
//! and a recording command runner.

use std::path::PathBuf;

use crate::codec::VersionFile;
use crate::config::{self, Config};
use crate::domain::{ReleaseIntent, Tag, Version};
use crate::error::{BumpError, Result};
use crate::git::{Git2Repository, Repository};
use crate::locator::VersionFileLocator;
use crate::runner::{self, CommandRunner, SystemRunner};
use crate::tag_manager::TagManager;
use crate::ui;

/// Label of the lock file refresh step
pub const LOCK_REFRESH_STEP: &str = "dependency lock refresh";

/// Label of the package publish step
pub const PUBLISH_STEP: &str = "package publish";

/// Result of a successful release run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// Version found in the file
    pub previous: Version,

    /// Version after the bump
    pub next: Version,

    /// Tag created (or that would have been, in dry-run)
    pub tag: Tag,

    /// The version file that was read
    pub version_file: PathBuf,

    /// False when nothing was written, committed or pushed
    pub mutated: bool,

    /// Best-effort steps that failed and were skipped
    pub failed_steps: Vec<String>,
}

/// Run `op`, logging and swallowing any failure
///
/// Returns `None` if the operation failed; the failure never propagates.
pub fn best_effort<T>(label: &str, op: impl FnOnce() -> Result<T>) -> Option<T> {
    match op() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(step = label, error = %e, "best-effort step failed");
            ui::display_warning(&format!("{} failed, continuing: {}", label, e));
            None
        }
    }
}

/// Release workflow against the given repository and runner
///
/// 1. Locate and parse the version file
/// 2. Compute the next version
/// 3. Show `old => new` (and the pretend marker) before touching anything
/// 4. Refuse early if the tag already exists
/// 5. Rewrite the file and refresh the lock file (best effort)
/// 6. Commit, tag and push
/// 7. Publish the package if asked (best effort)
pub fn run_release<R, C>(
    intent: &ReleaseIntent,
    config: &Config,
    repo: &R,
    runner: &C,
) -> Result<ReleaseOutcome>
where
    R: Repository + ?Sized,
    C: CommandRunner + ?Sized,
{
    let root = repo.workdir();
    let locator = VersionFileLocator::with_candidates(&config.version_files);
    let file = VersionFile::load(locator.locate(root)?)?;
    tracing::debug!(path = %file.path.display(), scope = file.declaration.scope(), "version file");

    let previous = file.version();
    let next = previous.bump(intent.bump);
    tracing::info!(
        bump = %intent.bump,
        dry_run = intent.dry_run,
        "{}",
        ui::format_transition(&previous, &next)
    );
    ui::display_transition(&previous, &next, intent.dry_run);

    let mut tags = TagManager::new(repo, runner, config.remote.as_str());
    let tag = Tag::for_version(&next);
    if tags.tag_exists(tag.as_str())? {
        return Err(BumpError::TagAlreadyExists { tag: tag.name });
    }

    let mut failed_steps = Vec::new();

    if !intent.dry_run {
        file.write(&next)?;
        ui::display_success(&format!("Updated {}", file.path.display()));

        if best_effort(LOCK_REFRESH_STEP, || {
            runner::run_argv(runner, root, &config.commands.lock_refresh)
        })
        .is_none()
        {
            failed_steps.push(LOCK_REFRESH_STEP.to_string());
        }
    }

    let tag = tags.create_release(&next, intent.bump, intent.effective_message(), intent.dry_run)?;

    if intent.dry_run {
        ui::display_would_tag(&tag);
    } else {
        let branch = repo.current_branch()?;
        ui::display_success(&format!(
            "Pushed {} and tag {} to {}",
            branch, tag, config.remote
        ));
    }

    if intent.publish {
        if intent.dry_run {
            ui::display_status(&format!(
                "Would publish with: {}",
                config.commands.publish.join(" ")
            ));
        } else if best_effort(PUBLISH_STEP, || {
            runner::run_argv_attached(runner, root, &config.commands.publish)
        })
        .is_none()
        {
            failed_steps.push(PUBLISH_STEP.to_string());
        } else {
            ui::display_success("Package published");
        }
    }

    Ok(ReleaseOutcome {
        previous,
        next,
        tag,
        version_file: file.path,
        mutated: !intent.dry_run,
        failed_steps,
    })
}

/// Release workflow against the real repository around `intent.root`
pub fn run(intent: &ReleaseIntent) -> Result<ReleaseOutcome> {
    let repo = Git2Repository::discover(&intent.root)?;
    let config = config::load_config(intent.config_path.as_deref(), repo.workdir())?;
    run_release(intent, &config, &repo, &SystemRunner::new())
}
