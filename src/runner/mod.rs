//! External process execution
//!
//! git and the build tool are only ever reached through [CommandRunner], so
//! the release workflow can run against [mock::RecordingRunner] in tests
//! without spawning anything.

pub mod mock;
pub mod system;

pub use mock::RecordingRunner;
pub use system::SystemRunner;

use std::path::Path;

use crate::error::Result;

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs a program to completion
///
/// Implementations return `Err(BumpError::CommandFailed)` when the program
/// exits unsuccessfully and `Err(BumpError::CommandSpawn)` when it cannot be
/// started at all.
pub trait CommandRunner {
    fn run(&self, cwd: &Path, program: &str, args: &[&str]) -> Result<CommandOutput>;

    /// Like [CommandRunner::run], but the child shares the user's terminal
    ///
    /// Used for steps that may prompt (e.g., a registry one-time password).
    /// Nothing is captured.
    fn run_attached(&self, cwd: &Path, program: &str, args: &[&str]) -> Result<()>;
}

/// Run a command given as a full argument vector
///
/// An empty vector means the step is disabled and yields `Ok(None)`.
pub fn run_argv<R: CommandRunner + ?Sized>(
    runner: &R,
    cwd: &Path,
    argv: &[String],
) -> Result<Option<CommandOutput>> {
    let Some((program, args)) = argv.split_first() else {
        return Ok(None);
    };
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    runner.run(cwd, program, &args).map(Some)
}

/// [run_argv] for a step that keeps the terminal attached
pub fn run_argv_attached<R: CommandRunner + ?Sized>(
    runner: &R,
    cwd: &Path,
    argv: &[String],
) -> Result<Option<()>> {
    let Some((program, args)) = argv.split_first() else {
        return Ok(None);
    };
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    runner.run_attached(cwd, program, &args).map(Some)
}

/// Shell-like rendering of a command line for messages
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .map(|part| {
            if part.is_empty() || part.contains(char::is_whitespace) {
                format!("\"{}\"", part.replace('"', "\\\""))
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
