//! # debugpy launcher
//!
//! A small launcher that starts the debugpy launcher inside a running
//! container. The debug adapter invokes it with the launcher arguments
//! followed by the internal hostname, the container-exec tool and the
//! container id:
//!
//! ```text
//! launcher <adapter-host> [args...] <hostname> <exe-path> <container-id>
//! ```
//!
//! It prints and runs
//! `<exe-path> exec -d <container-id> python3 /debugpy/launcher <args...>`,
//! qualifying a bare-port adapter host with the hostname first. The child is
//! spawned directly, without a shell, and its exit code becomes ours.
//!
//! ## Example
//!
//! ```no_run
//! use debugpy_launcher::{config::Config, core::{ExecCommand, Invocation}};
//!
//! let invocation = Invocation::from_args(["5678", "myhost", "docker", "abc123"])?;
//! let command = ExecCommand::new(&Config::default(), &invocation);
//! assert_eq!(
//!     command.to_string(),
//!     "docker exec -d abc123 python3 /debugpy/launcher myhost:5678"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use error::{LauncherError, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr; stdout is reserved for the command line
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| LauncherError::logging(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}
