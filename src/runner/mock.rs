use crate::error::{BumpError, Result};
use crate::runner::{display_command, CommandOutput, CommandRunner};
use std::cell::RefCell;
use std::path::Path;

/// Mock runner that records commands instead of executing them
///
/// Commands whose rendered form starts with a registered prefix fail with
/// `CommandFailed`; everything else succeeds with empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    commands: RefCell<Vec<String>>,
    attached: RefCell<Vec<String>>,
    failing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make commands starting with `prefix` fail (e.g., "bundle install")
    pub fn fail_on(mut self, prefix: impl Into<String>) -> Self {
        self.failing.push(prefix.into());
        self
    }

    /// Every command run so far, failed ones included, in order
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    /// Commands that start with `program`
    pub fn commands_for(&self, program: &str) -> Vec<String> {
        let prefix = format!("{} ", program);
        self.commands
            .borrow()
            .iter()
            .filter(|c| c.starts_with(&prefix) || c.as_str() == program)
            .cloned()
            .collect()
    }

    /// Commands that were run with the terminal attached
    pub fn attached(&self) -> Vec<String> {
        self.attached.borrow().clone()
    }

    fn record(&self, program: &str, args: &[&str]) -> Result<String> {
        let command = display_command(program, args);
        self.commands.borrow_mut().push(command.clone());

        if self.failing.iter().any(|prefix| command.starts_with(prefix)) {
            return Err(BumpError::CommandFailed {
                command,
                status: "exit status: 1".to_string(),
                stderr: "simulated failure".to_string(),
            });
        }
        Ok(command)
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, _cwd: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
        self.record(program, args)?;
        Ok(CommandOutput::default())
    }

    fn run_attached(&self, _cwd: &Path, program: &str, args: &[&str]) -> Result<()> {
        let command = self.record(program, args)?;
        self.attached.borrow_mut().push(command);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let runner = RecordingRunner::new();
        runner.run(Path::new("."), "git", &["add", "-A"]).unwrap();
        runner.run(Path::new("."), "bundle", &["install"]).unwrap();

        assert_eq!(runner.commands(), vec!["git add -A", "bundle install"]);
        assert_eq!(runner.commands_for("git"), vec!["git add -A"]);
    }

    #[test]
    fn test_fail_on_prefix() {
        let runner = RecordingRunner::new().fail_on("git push");
        assert!(runner.run(Path::new("."), "git", &["commit"]).is_ok());

        let err = runner
            .run(Path::new("."), "git", &["push", "origin", "HEAD"])
            .unwrap_err();
        assert!(matches!(err, BumpError::CommandFailed { .. }));
        assert_eq!(runner.commands().len(), 2);
    }

    #[test]
    fn test_attached_commands_are_recorded_separately() {
        let runner = RecordingRunner::new().fail_on("gem push");
        runner.run(Path::new("."), "git", &["add", "-A"]).unwrap();
        runner.run_attached(Path::new("."), "rake", &["release"]).unwrap();
        assert!(runner.run_attached(Path::new("."), "gem", &["push"]).is_err());

        assert_eq!(runner.commands(), vec!["git add -A", "rake release", "gem push"]);
        assert_eq!(runner.attached(), vec!["rake release"]);
    }
}
