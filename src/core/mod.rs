//! Core launcher logic
//!
//! Unpacks the positional argument list and builds the container-exec
//! command from it.

pub mod exec;
pub mod invocation;

pub use exec::ExecCommand;
pub use invocation::{Invocation, MIN_ARGS};
