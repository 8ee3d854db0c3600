//! Command-line argument intake
//!
//! The launcher has no flags of its own: everything on the command line is
//! positional and forwarded, so help and version handling are switched off.
//! Arguments are kept as `OsString` so non-UTF-8 filenames survive.

use clap::Parser;
use std::ffi::OsString;

/// Forwards debugpy launcher arguments into a running container
#[derive(Parser, Debug)]
#[command(name = "launcher", about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// <adapter-host> [args...] <hostname> <exe-path> <container-id>
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
