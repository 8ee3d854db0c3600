//! Configuration for the launcher
//!
//! The launcher takes no config file. The only tunable is debug logging,
//! read from the environment. The in-container interpreter and launcher path
//! are fixed.

use std::env;

/// Environment variable enabling debug logging
pub const DEBUG_ENV_VAR: &str = "DEBUGPY_LAUNCHER_LOG";

/// Interpreter used inside the container
pub const CONTAINER_PYTHON: &str = "python3";

/// Location of the debugpy launcher inside the container
pub const CONTAINER_LAUNCHER: &str = "/debugpy/launcher";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Interpreter run by the container-exec tool
    pub python: String,
    /// debugpy launcher script inside the container
    pub launcher: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            python: CONTAINER_PYTHON.to_string(),
            launcher: CONTAINER_LAUNCHER.to_string(),
        }
    }
}

impl Config {
    /// Create configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_debug_value(env::var(DEBUG_ENV_VAR).ok().as_deref())
    }

    fn from_debug_value(value: Option<&str>) -> Self {
        Self {
            debug: value.is_some_and(is_enabled),
            ..Self::default()
        }
    }
}

fn is_enabled(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.debug);
        assert_eq!(config.python, "python3");
        assert_eq!(config.launcher, "/debugpy/launcher");
    }

    #[test]
    fn test_debug_value_parsing() {
        assert!(!Config::from_debug_value(None).debug);
        assert!(!Config::from_debug_value(Some("")).debug);
        assert!(!Config::from_debug_value(Some("0")).debug);
        assert!(!Config::from_debug_value(Some("FALSE")).debug);
        assert!(Config::from_debug_value(Some("1")).debug);
        assert!(Config::from_debug_value(Some("debug")).debug);
    }
}
