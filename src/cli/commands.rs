//! Launcher command execution

use crate::{
    config::Config,
    core::{ExecCommand, Invocation},
    utils::ProcessRunner,
};
use anyhow::Context;
use std::{
    ffi::OsString,
    io::{self, Write},
};
use tracing::{debug, instrument};

/// Unpack the arguments, build the container-exec command without running it
#[instrument(skip(config))]
pub fn prepare_command(config: &Config, args: &[OsString]) -> anyhow::Result<ExecCommand> {
    let invocation = Invocation::from_args(args.iter().cloned())?;
    let command = ExecCommand::new(config, &invocation);
    debug!(argv = ?command.argv(), "Prepared container-exec command");
    Ok(command)
}

/// Print and run the launcher command, returning the child's exit code
#[instrument(skip(config))]
pub fn execute_command(config: &Config, args: &[OsString]) -> anyhow::Result<i32> {
    let command = prepare_command(config, args)?;

    announce(&mut io::stdout().lock(), &command).context("Failed to print command line")?;

    let runner = ProcessRunner::new();
    let exit_code = runner
        .run_inherited(&command)
        .context("Failed to launch debugpy in container")?;

    debug!("Launcher finished with exit code {}", exit_code);
    Ok(exit_code)
}

/// Write the command line and flush so it precedes any child output
fn announce<W: Write>(out: &mut W, command: &ExecCommand) -> io::Result<()> {
    writeln!(out, "{command}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LauncherError;

    fn strings(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_prepare_command() {
        let command = prepare_command(
            &Config::default(),
            &strings(&["5678", "extra1", "myhost", "/usr/bin/docker", "abc123"]),
        )
        .unwrap();
        assert_eq!(
            command.to_string(),
            "/usr/bin/docker exec -d abc123 python3 /debugpy/launcher myhost:5678 extra1"
        );
    }

    #[test]
    fn test_prepare_command_too_few_args() {
        let err = prepare_command(&Config::default(), &strings(&["myhost", "docker", "abc"]))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LauncherError>(),
            Some(LauncherError::InsufficientArguments { found: 3, required: 4 })
        ));
    }

    #[test]
    fn test_execute_command_too_few_args_does_not_spawn() {
        let result = execute_command(&Config::default(), &strings(&["docker"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_announce_writes_single_line() {
        let command = prepare_command(
            &Config::default(),
            &strings(&["myhost:5678", "myhost", "/usr/bin/docker", "abc123"]),
        )
        .unwrap();

        let mut out = Vec::new();
        announce(&mut out, &command).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "/usr/bin/docker exec -d abc123 python3 /debugpy/launcher myhost:5678\n"
        );
    }
}
