//! Turning legacy command-line tokens into an [`InstallationPlan`].
//!
//! The token surface is deliberately loose: flags are matched by prefix
//! (`-source` works like `-s`), package names by exact upper- or lower-case
//! spelling, and anything unrecognized is ignored.

use std::collections::BTreeSet;

use serde::Serialize;

use super::package::Package;

const HELP_PREFIX: &str = "-h";
const SOURCE_PREFIX: &str = "-s";
const SOURCE_ONLY_PREFIX: &str = "-S";
const CHECK_ONLY_PREFIX: &str = "-t";
const NO_BINARY: &str = "nobinary";
const NO_TESTING: &str = "notesting";

/// What to install and how, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallationPlan {
    packages: BTreeSet<Package>,
    fetch_binary: bool,
    fetch_source: bool,
    run_support_check: bool,
    check_only: bool,
}

impl InstallationPlan {
    /// Selected packages, in processing order.
    pub fn packages(&self) -> impl Iterator<Item = Package> + '_ {
        self.packages.iter().copied()
    }

    /// Whether `package` is part of the plan.
    pub fn includes(&self, package: Package) -> bool {
        self.packages.contains(&package)
    }

    /// Number of selected packages.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Download and unpack binary distributions.
    pub fn fetch_binary(&self) -> bool {
        self.fetch_binary
    }

    /// Clone or update source repositories.
    pub fn fetch_source(&self) -> bool {
        self.fetch_source
    }

    /// Verify support modules for packages that declare them.
    pub fn run_support_check(&self) -> bool {
        self.run_support_check
    }

    /// Run support checks only, then stop before any package action.
    pub fn check_only(&self) -> bool {
        self.check_only
    }
}

impl Default for InstallationPlan {
    fn default() -> Self {
        Self {
            packages: Package::ALL.into_iter().collect(),
            fetch_binary: true,
            fetch_source: false,
            run_support_check: true,
            check_only: false,
        }
    }
}

/// Outcome of resolving the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A help token was given: print the syntax and stop.
    Help,
    /// Proceed with this plan.
    Install(InstallationPlan),
}

/// Resolve legacy tokens into a [`Resolution`].
///
/// This is a pure function of `args`; token order never changes the result.
/// When no package name is among the tokens, every package is selected.
pub fn resolve<S: AsRef<str>>(args: &[S]) -> Resolution {
    let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

    if tokens.iter().any(|t| t.starts_with(HELP_PREFIX)) {
        return Resolution::Help;
    }

    let mut plan = InstallationPlan::default();

    // Scope flags.
    for token in &tokens {
        if token.starts_with(SOURCE_ONLY_PREFIX) {
            plan.fetch_source = true;
            plan.fetch_binary = false;
        } else if token.starts_with(SOURCE_PREFIX) {
            plan.fetch_source = true;
        } else if token.starts_with(CHECK_ONLY_PREFIX) {
            plan.check_only = true;
        }
    }

    // Package names narrow the default full set to an allow-list.
    let named: BTreeSet<Package> = tokens.iter().filter_map(|t| Package::from_token(t)).collect();
    if !named.is_empty() {
        plan.packages = named;
    }

    // Modifiers override whatever the scope flags set.
    for token in &tokens {
        match *token {
            NO_BINARY => plan.fetch_binary = false,
            NO_TESTING => plan.run_support_check = false,
            _ => {}
        }
    }

    for token in tokens.iter().filter(|t| !is_recognized(t)) {
        tracing::debug!("Ignoring unrecognized argument: {}", token);
    }

    Resolution::Install(plan)
}

fn is_recognized(token: &str) -> bool {
    token.starts_with(SOURCE_PREFIX)
        || token.starts_with(SOURCE_ONLY_PREFIX)
        || token.starts_with(CHECK_ONLY_PREFIX)
        || token == NO_BINARY
        || token == NO_TESTING
        || Package::from_token(token).is_some()
}
