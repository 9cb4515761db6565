//! CLI argument definitions.
//!
//! Long options come first and are parsed by clap. Everything after them is
//! kept verbatim as legacy selection tokens (`-s`, `-S`, `-t`, `-h`,
//! `nobinary`, `notesting` and package names) and handed to
//! [`crate::selection::resolve`].

use clap::Parser;
use std::path::PathBuf;

use crate::config::CopasConfig;
use crate::ui::OutputMode;

/// CoPAS - fetch and update the Community Packages for Atmospheric Science.
#[derive(Debug, Parser)]
#[command(name = "copas")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Install root (overrides the config file and the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Path to config file (default: ./copas.yml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print what would be done without downloading or checking out anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the resolved installation plan as JSON and exit
    #[arg(long)]
    pub show_plan: bool,

    /// Show output of svn and git
    #[arg(long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print help for the long options (`-h` prints the token syntax)
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,

    /// Selection tokens: package names, -s, -S, -t, -h, nobinary, notesting
    #[arg(
        value_name = "TOKENS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Output mode from the flags, falling back to the config file.
    pub fn output_mode(&self, config: &CopasConfig) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            config.output.map(OutputMode::from).unwrap_or_default()
        }
    }
}
