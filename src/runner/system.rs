use crate::error::{BumpError, Result};
use crate::runner::{display_command, CommandOutput, CommandRunner};
use std::path::Path;
use std::process::Command;

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl CommandRunner for SystemRunner {
    /// Execute `program` in `cwd` and wait for it
    ///
    /// Any non-zero exit code is treated as a failure; stdout and stderr
    /// are captured either way.
    fn run(&self, cwd: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let command = display_command(program, args);
        tracing::debug!(cwd = %cwd.display(), %command, "running");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|source| BumpError::CommandSpawn {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(BumpError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }

    /// Execute `program` with inherited stdin, stdout and stderr
    fn run_attached(&self, cwd: &Path, program: &str, args: &[&str]) -> Result<()> {
        let command = display_command(program, args);
        tracing::debug!(cwd = %cwd.display(), %command, "running attached");

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|source| BumpError::CommandSpawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(BumpError::CommandFailed {
                command,
                status: status.to_string(),
                stderr: String::new(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_spawn_error() {
        let result = SystemRunner::new().run(
            Path::new("."),
            "git-bump-definitely-not-a-program",
            &["--version"],
        );
        assert!(matches!(result, Err(BumpError::CommandSpawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_failure() {
        let result =
            SystemRunner::new().run(Path::new("."), "sh", &["-c", "echo oops >&2; exit 3"]);
        match result {
            Err(BumpError::CommandFailed { stderr, .. }) => assert_eq!(stderr, "oops"),
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout() {
        let out = SystemRunner::new()
            .run(Path::new("."), "sh", &["-c", "echo hello"])
            .unwrap();
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_attached_reports_exit_status() {
        let runner = SystemRunner::new();
        assert!(runner.run_attached(Path::new("."), "sh", &["-c", "exit 0"]).is_ok());

        let result = runner.run_attached(Path::new("."), "sh", &["-c", "exit 4"]);
        match result {
            Err(BumpError::CommandFailed { status, .. }) => assert!(status.contains('4')),
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_attached_missing_program_is_spawn_error() {
        let result = SystemRunner::new().run_attached(
            Path::new("."),
            "git-bump-definitely-not-a-program",
            &[],
        );
        assert!(matches!(result, Err(BumpError::CommandSpawn { .. })));
    }
}
