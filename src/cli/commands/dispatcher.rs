//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing a resolved command line

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::config::CopasConfig;
use crate::error::Result;
use crate::selection::{resolve, Resolution};
use crate::ui::UserInterface;

use super::help::HelpCommand;
use super::install::InstallCommand;
use super::plan::ShowPlanCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Routes the command line to the help, show-plan or install command.
pub struct CommandDispatcher {
    working_dir: PathBuf,
    config: CopasConfig,
}

impl CommandDispatcher {
    /// Create a dispatcher for `working_dir` with an already loaded config.
    pub fn new(working_dir: PathBuf, config: CopasConfig) -> Self {
        Self {
            working_dir,
            config,
        }
    }

    /// Directory the process was started in.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Install root: `--root`, then the config file, then the working directory.
    pub fn install_root(&self, cli: &Cli) -> PathBuf {
        let root = cli
            .root
            .as_ref()
            .or(self.config.root.as_ref())
            .cloned()
            .unwrap_or_else(|| self.working_dir.clone());

        if root.is_absolute() {
            root
        } else {
            self.working_dir.join(root)
        }
    }

    /// Resolve the legacy tokens and execute the matching command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match resolve(&cli.tokens) {
            Resolution::Help => HelpCommand::new().execute(ui),
            Resolution::Install(plan) if cli.show_plan => ShowPlanCommand::new(plan).execute(ui),
            Resolution::Install(plan) => {
                let cmd = InstallCommand::new(
                    plan,
                    self.install_root(cli),
                    self.config.clone(),
                    cli.dry_run,
                );
                cmd.execute(ui)
            }
        }
    }
}
