//! Construction of the outbound container-exec command

use crate::{config::Config, core::invocation::Invocation};
use std::{
    ffi::{OsStr, OsString},
    fmt,
};

/// Program and argument vector handed to the container-exec tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecCommand {
    /// Container-exec tool to run
    pub program: OsString,
    /// Arguments, starting with `exec -d <container>`
    pub args: Vec<OsString>,
}

impl ExecCommand {
    /// Build `<exe> exec -d <container> <python> <launcher> <forwarded...>`
    pub fn new(config: &Config, invocation: &Invocation) -> Self {
        let mut args = vec![
            OsString::from("exec"),
            OsString::from("-d"),
            invocation.container_id().to_os_string(),
            OsString::from(&config.python),
            OsString::from(&config.launcher),
        ];
        args.extend(invocation.resolved_args());

        Self {
            program: invocation.exe_path().to_os_string(),
            args,
        }
    }

    /// Full command vector, program first
    pub fn argv(&self) -> Vec<&OsStr> {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .collect()
    }
}

/// Single-space join without quoting, kept stable for log scrapers.
/// Non-UTF-8 bytes are shown as U+FFFD.
impl fmt::Display for ExecCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self.argv().into_iter().map(OsStr::to_string_lossy).collect();
        f.write_str(&parts.join(" "))
    }
}
