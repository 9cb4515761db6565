//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! There are no subcommands. The legacy tokens decide which command runs:
//! - [`help`] - `-h` prints the token syntax
//! - [`plan`] - `--show-plan` prints the resolved plan
//! - [`install`] - everything else installs the selected packages

pub mod dispatcher;
pub mod help;
pub mod install;
pub mod plan;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
