//! Support-module checks.
//!
//! Some packages need Python modules at run time. Required modules that
//! fail to import stop the installer; optional ones only produce a warning.

pub mod checker;
pub mod status;

pub use checker::{ModuleFinder, PythonFinder, SupportChecker};
pub use status::{ModuleCheck, ModuleStatus, SupportReport};
