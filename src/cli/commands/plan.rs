//! `--show-plan`: print the resolved plan as JSON.

use crate::error::Result;
use crate::selection::InstallationPlan;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints an [`InstallationPlan`] without acting on it.
pub struct ShowPlanCommand {
    plan: InstallationPlan,
}

impl ShowPlanCommand {
    pub fn new(plan: InstallationPlan) -> Self {
        Self { plan }
    }

    /// Pretty-printed JSON for the plan.
    pub fn render(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.plan)
            .map_err(|e| anyhow::anyhow!("Failed to serialize plan: {}", e))?;
        Ok(json)
    }
}

impl Command for ShowPlanCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        println!("{}", self.render()?);
        Ok(CommandResult::success())
    }
}
