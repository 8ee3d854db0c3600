#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use debugpy_launcher::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Debug logging is controlled by the environment only
    let config = Config::from_env();
    setup_logging(config.debug)?;

    // Run the container-exec command and mirror its exit status
    let exit_code = cli::execute_command(&config, &args.args)?;
    std::process::exit(exit_code)
}
