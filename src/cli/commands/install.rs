//! Install command implementation.
//!
//! Runs the resolved plan against the catalog built from the config file.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::catalog::Catalog;
use crate::config::{CopasConfig, Credentials};
use crate::error::Result;
use crate::installer::{InstallSettings, Installer, Layout};
use crate::selection::InstallationPlan;
use crate::support::PythonFinder;
use crate::ui::{format_duration, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    plan: InstallationPlan,
    root: PathBuf,
    config: CopasConfig,
    dry_run: bool,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(plan: InstallationPlan, root: PathBuf, config: CopasConfig, dry_run: bool) -> Self {
        Self {
            plan,
            root,
            config,
            dry_run,
        }
    }

    /// Get the install root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Installer settings derived from the config; a zero timeout disables it.
    pub fn settings(&self) -> InstallSettings {
        let timeout = match self.config.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        InstallSettings {
            dry_run: self.dry_run,
            timeout,
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = Catalog::from_config(&self.config);
        let credentials = Credentials::from_env();
        let finder = PythonFinder::new(self.config.python.clone());

        tracing::debug!("Install root: {}", self.root.display());
        if self.dry_run {
            ui.message(&format!(
                "Dry run: nothing will be downloaded or checked out under {}",
                self.root.display()
            ));
        }

        let start = Instant::now();
        let mut installer = Installer::new(
            &catalog,
            Layout::new(&self.root),
            credentials,
            finder,
            &self.settings(),
        )?;
        let summary = installer.run(&self.plan, ui)?;

        if !self.plan.check_only() {
            ui.success(&format!(
                "Processed {} package(s) in {} ({})",
                summary.completed.len(),
                self.root.display(),
                format_duration(start.elapsed())
            ));
        }

        Ok(CommandResult::success())
    }
}
