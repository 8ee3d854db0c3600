//! Positional unpacking of the launcher's argument list
//!
//! The debug adapter appends three values to the arguments meant for the
//! in-container launcher: the internal hostname, the container-exec tool and
//! the container id. Everything before them is forwarded.

use crate::error::{LauncherError, Result};
use std::ffi::{OsStr, OsString};
use tracing::debug;

/// Number of values appended after the forwarded arguments
const TRAILING_ARGS: usize = 3;

/// Minimum argument count: one forwarded argument plus the trailing three
pub const MIN_ARGS: usize = TRAILING_ARGS + 1;

/// A single launcher invocation, unpacked by position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    forwarded_args: Vec<OsString>,
    hostname: OsString,
    exe_path: OsString,
    container_id: OsString,
}

impl Invocation {
    /// Unpack an argument list that excludes the program name
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let found = args.len();

        if found < MIN_ARGS {
            return Err(LauncherError::insufficient_arguments(found, MIN_ARGS));
        }

        let trailing = args.split_off(found - TRAILING_ARGS);
        let [hostname, exe_path, container_id]: [OsString; TRAILING_ARGS] = trailing
            .try_into()
            .map_err(|_| LauncherError::insufficient_arguments(found, MIN_ARGS))?;

        let invocation = Self {
            forwarded_args: args,
            hostname,
            exe_path,
            container_id,
        };
        debug!(?invocation, "Unpacked invocation");
        Ok(invocation)
    }

    /// Arguments for the debugpy launcher, first one is the adapter host
    pub fn forwarded_args(&self) -> &[OsString] {
        &self.forwarded_args
    }

    /// Hostname the container uses to reach the debug adapter
    pub fn hostname(&self) -> &OsStr {
        &self.hostname
    }

    /// Container-exec tool, e.g. `docker`
    pub fn exe_path(&self) -> &OsStr {
        &self.exe_path
    }

    /// Target container
    pub fn container_id(&self) -> &OsStr {
        &self.container_id
    }

    /// The adapter host as given, before any rewriting
    pub fn adapter_host(&self) -> Option<&OsStr> {
        self.forwarded_args.first().map(OsString::as_os_str)
    }

    /// Forwarded arguments with a bare-port adapter host qualified by hostname
    pub fn resolved_args(&self) -> Vec<OsString> {
        let mut args = self.forwarded_args.clone();
        if let Some(adapter_host) = args.first_mut() {
            *adapter_host = resolve_adapter_host(&self.hostname, adapter_host);
        }
        args
    }
}

/// Prefix a bare port with `hostname:`, leave anything else untouched
pub fn resolve_adapter_host(hostname: &OsStr, adapter_host: &OsStr) -> OsString {
    if is_bare_port(adapter_host) {
        let mut qualified = hostname.to_os_string();
        qualified.push(":");
        qualified.push(adapter_host);
        qualified
    } else {
        adapter_host.to_os_string()
    }
}

fn is_bare_port(value: &OsStr) -> bool {
    let bytes = value.as_encoded_bytes();
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}
