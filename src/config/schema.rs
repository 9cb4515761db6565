//! Configuration schema definitions.
//!
//! Maps the optional `copas.yml` file. Every field has a default, so an empty
//! or absent file yields [`CopasConfig::default()`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::selection::Package;

/// Root configuration structure for copas.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopasConfig {
    /// Install root; package directories are created beneath it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Interpreter used for support-module checks.
    #[serde(default = "default_python")]
    pub python: String,

    /// HTTP timeout for binary downloads, in seconds (0 disables it).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default output mode when no CLI flag overrides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,

    /// Per-package overrides of the built-in catalog, keyed by package name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub packages: BTreeMap<String, PackageOverride>,
}

impl Default for CopasConfig {
    fn default() -> Self {
        Self {
            root: None,
            python: default_python(),
            timeout_secs: default_timeout_secs(),
            output: None,
            packages: BTreeMap::new(),
        }
    }
}

impl CopasConfig {
    /// Override block for `package`, if the config has one.
    ///
    /// Keys are matched the same way command-line tokens are, so both
    /// `ADPAA:` and `adpaa:` work.
    pub fn package_override(&self, package: Package) -> Option<&PackageOverride> {
        self.packages
            .iter()
            .find(|(key, _)| Package::from_token(key) == Some(package))
            .map(|(_, over)| over)
    }

    /// Keys under `packages:` that do not name a known package.
    pub fn unknown_package_keys(&self) -> Vec<&str> {
        self.packages
            .keys()
            .filter(|key| Package::from_token(key).is_none())
            .map(String::as_str)
            .collect()
    }
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

/// Output verbosity as written in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
}

/// Replacement values for one catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageOverride {
    /// Binary distribution URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_url: Option<String>,

    /// Anonymous source repository URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Python modules that must import for the package to work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_modules: Option<Vec<String>>,

    /// Python modules that only enable extra features.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_modules: Option<Vec<String>>,
}
