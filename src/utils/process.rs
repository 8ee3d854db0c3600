//! Process execution utilities
//!
//! Runs the container-exec tool directly, without a shell, and translates its
//! exit status into an exit code for this process.

use crate::{
    core::ExecCommand,
    error::{LauncherError, Result},
};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, instrument, warn};

/// Utility for running external processes
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run a command, inheriting all standard streams, and return its exit code
    #[instrument(skip(self, command), fields(program = ?command.program))]
    pub fn run_inherited(&self, command: &ExecCommand) -> Result<i32> {
        debug!(argv = ?command.argv(), "Running command");

        let status = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| LauncherError::spawn(command.to_string(), e))?;

        let exit_code = exit_code(status);
        if status.success() {
            debug!("Command completed successfully");
        } else {
            warn!("Command exited with status {}", exit_code);
        }
        Ok(exit_code)
    }
}

/// Exit code for a finished child, `128 + signal` when it was killed
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn command(program: &str, args: &[&str]) -> ExecCommand {
        ExecCommand {
            program: OsString::from(program),
            args: args.iter().map(OsString::from).collect(),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_successful_command() {
        let runner = ProcessRunner::new();
        let code = runner.run_inherited(&command("true", &[])).unwrap();
        assert_eq!(code, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_is_propagated() {
        let runner = ProcessRunner::new();
        let code = runner
            .run_inherited(&command("sh", &["-c", "exit 7"]))
            .unwrap();
        assert_eq!(code, 7);
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_maps_to_shell_convention() {
        let runner = ProcessRunner::new();
        let code = runner
            .run_inherited(&command("sh", &["-c", "kill -9 $$"]))
            .unwrap();
        assert_eq!(code, 128 + 9);
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let runner = ProcessRunner::new();
        let result = runner.run_inherited(&command("nonexistent_command_12345", &["exec"]));

        if let Err(LauncherError::Spawn { command, source }) = result {
            assert_eq!(command, "nonexistent_command_12345 exec");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected Spawn error");
        }
    }
}
