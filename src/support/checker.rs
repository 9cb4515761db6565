//! Python module availability checks.
//!
//! The `SupportChecker` asks a [`ModuleFinder`] whether each module a package
//! lists can be imported, caching answers within a run so a module shared by
//! several packages is only looked up once.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::catalog::CatalogEntry;
use crate::shell;

use super::status::{ModuleCheck, ModuleStatus, SupportReport};

/// Something that can tell whether a Python module imports.
pub trait ModuleFinder {
    fn is_importable(&self, module: &str) -> bool;
}

/// Finds modules by running `<python> -c "import <module>"`.
#[derive(Debug, Clone)]
pub struct PythonFinder {
    python: String,
}

impl PythonFinder {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// Interpreter this finder runs.
    pub fn python(&self) -> &str {
        &self.python
    }
}

impl ModuleFinder for PythonFinder {
    fn is_importable(&self, module: &str) -> bool {
        if !is_module_name(module) {
            tracing::warn!("'{}' is not a valid Python module name", module);
            return false;
        }
        let statement = format!("import {}", module);
        shell::succeeds(&self.python, &["-c", statement.as_str()])
    }
}

/// Checks support modules for catalog entries.
pub struct SupportChecker<P: ModuleFinder> {
    finder: P,
    cache: HashMap<String, ModuleStatus>,
}

impl<P: ModuleFinder> SupportChecker<P> {
    pub fn new(finder: P) -> Self {
        Self {
            finder,
            cache: HashMap::new(),
        }
    }

    /// Check every required and optional module of `entry`.
    pub fn check(&mut self, entry: &CatalogEntry) -> SupportReport {
        let support = &entry.support;
        let modules = support
            .required
            .iter()
            .map(|m| (m, true))
            .chain(support.optional.iter().map(|m| (m, false)));

        let checks = modules
            .map(|(module, required)| ModuleCheck {
                module: module.clone(),
                required,
                status: self.status_of(module),
            })
            .collect();

        SupportReport {
            package: entry.package,
            checks,
        }
    }

    /// Check a single module, using the cache when available.
    pub fn status_of(&mut self, module: &str) -> ModuleStatus {
        if let Some(status) = self.cache.get(module) {
            return *status;
        }

        let status = if self.finder.is_importable(module) {
            ModuleStatus::Available
        } else {
            ModuleStatus::Missing
        };
        tracing::debug!("Python module {}: {:?}", module, status);
        self.cache.insert(module.to_string(), status);
        status
    }
}

/// Dotted Python identifier, e.g. `numpy` or `matplotlib.pyplot`.
static MODULE_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").ok()
});

fn is_module_name(module: &str) -> bool {
    MODULE_NAME
        .as_ref()
        .is_some_and(|re| re.is_match(module))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::selection::Package;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Finder with a fixed set of installed modules that records each call.
    struct FakeFinder {
        installed: HashSet<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeFinder {
        fn with(installed: &[&'static str]) -> Self {
            Self {
                installed: installed.iter().copied().collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ModuleFinder for &FakeFinder {
        fn is_importable(&self, module: &str) -> bool {
            self.calls.borrow_mut().push(module.to_string());
            self.installed.contains(module)
        }
    }

    #[test]
    fn reports_required_and_optional_modules() {
        let finder = FakeFinder::with(&["numpy", "scipy", "matplotlib", "pandas"]);
        let mut checker = SupportChecker::new(&finder);
        let catalog = Catalog::builtin();

        let report = checker.check(catalog.get(Package::Adpaa));

        assert_eq!(report.package, Package::Adpaa);
        assert_eq!(report.checks.len(), 5);
        assert!(report.is_usable());
        assert_eq!(report.missing_optional().collect::<Vec<_>>(), vec!["netCDF4"]);
    }

    #[test]
    fn missing_required_module_is_reported() {
        let finder = FakeFinder::with(&["numpy", "scipy"]);
        let mut checker = SupportChecker::new(&finder);
        let catalog = Catalog::builtin();

        let report = checker.check(catalog.get(Package::Adpaa));

        assert!(!report.is_usable());
        assert_eq!(report.missing_required().collect::<Vec<_>>(), vec!["matplotlib"]);
    }

    #[test]
    fn package_without_modules_has_empty_report() {
        let finder = FakeFinder::with(&[]);
        let mut checker = SupportChecker::new(&finder);
        let catalog = Catalog::builtin();

        let report = checker.check(catalog.get(Package::Soda));

        assert!(report.checks.is_empty());
        assert!(report.is_usable());
        assert!(finder.calls.borrow().is_empty());
    }

    #[test]
    fn results_are_cached() {
        let finder = FakeFinder::with(&["numpy"]);
        let mut checker = SupportChecker::new(&finder);

        assert_eq!(checker.status_of("numpy"), ModuleStatus::Available);
        assert_eq!(checker.status_of("numpy"), ModuleStatus::Available);
        assert_eq!(checker.status_of("wx"), ModuleStatus::Missing);
        assert_eq!(checker.status_of("wx"), ModuleStatus::Missing);

        assert_eq!(*finder.calls.borrow(), vec!["numpy", "wx"]);
    }

    #[test]
    fn module_name_validation() {
        assert!(is_module_name("numpy"));
        assert!(is_module_name("matplotlib.pyplot"));
        assert!(is_module_name("_private"));
        assert!(!is_module_name(""));
        assert!(!is_module_name("1numpy"));
        assert!(!is_module_name("os; print(1)"));
        assert!(!is_module_name("numpy."));
        assert!(!is_module_name("numpy..core"));
        assert!(!is_module_name("numpy\nimport os"));
        assert!(!is_module_name("nümpy"));
    }

    #[test]
    fn invalid_module_name_is_never_importable() {
        let finder = PythonFinder::new("python3");
        assert!(!finder.is_importable("os; import sys"));
    }

    #[test]
    fn unavailable_interpreter_means_missing() {
        let finder = PythonFinder::new("copas-no-such-python");
        assert_eq!(finder.python(), "copas-no-such-python");
        assert!(!finder.is_importable("sys"));
    }
}
