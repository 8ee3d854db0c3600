//! Error types for the launcher
//!
//! Provides structured error handling with context and proper error chains.

use thiserror::Error;

/// Main error type for the launcher
#[derive(Error, Debug)]
pub enum LauncherError {
    /// Too few positional arguments to unpack an invocation
    #[error(
        "Insufficient arguments: expected at least {required} \
         (<adapter-host> [args...] <hostname> <exe-path> <container-id>), got {found}"
    )]
    InsufficientArguments { found: usize, required: usize },

    /// The container-exec tool could not be started
    #[error("Process error: failed to spawn `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Logging subscriber setup errors
    #[error("Logging error: {message}")]
    Logging { message: String },
}

impl LauncherError {
    /// Create a new insufficient arguments error
    pub fn insufficient_arguments(found: usize, required: usize) -> Self {
        Self::InsufficientArguments { found, required }
    }

    /// Create a new spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create a new logging error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LauncherError>;
