//! External program execution and environment detection.

pub mod command;
pub mod platform;

pub use command::{display_command, run, run_checked, succeeds, CommandOptions, CommandOutput};
pub use platform::is_ci;
