//! Support check results.

use crate::selection::Package;

/// Availability of one Python module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStatus {
    /// `import <module>` succeeded.
    Available,
    /// The import failed or the interpreter could not run.
    Missing,
}

/// Outcome of checking one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCheck {
    pub module: String,
    /// Whether the package cannot work without it.
    pub required: bool,
    pub status: ModuleStatus,
}

/// All module checks for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportReport {
    pub package: Package,
    pub checks: Vec<ModuleCheck>,
}

impl SupportReport {
    /// Required modules that are not available.
    pub fn missing_required(&self) -> impl Iterator<Item = &str> {
        self.missing(true)
    }

    /// Optional modules that are not available.
    pub fn missing_optional(&self) -> impl Iterator<Item = &str> {
        self.missing(false)
    }

    /// Whether every required module is available.
    pub fn is_usable(&self) -> bool {
        self.missing_required().next().is_none()
    }

    fn missing(&self, required: bool) -> impl Iterator<Item = &str> {
        self.checks
            .iter()
            .filter(move |c| c.required == required && c.status == ModuleStatus::Missing)
            .map(|c| c.module.as_str())
    }
}
