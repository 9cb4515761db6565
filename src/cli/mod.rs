//! Command-line interface for CoPAS.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap's derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{Command, CommandDispatcher, CommandResult};
