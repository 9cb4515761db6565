//! Package catalog.
//!
//! Maps every [`Package`] to its binary distribution, source repository and
//! support modules. The installer is a single generic routine over these
//! entries; nothing about a particular package is hard-coded elsewhere.
//!
//! Entries start from the built-in table and can be overridden per package
//! from `copas.yml`.

mod builtin;
pub mod entry;

pub use entry::{BinaryArtifact, CatalogEntry, SourceRepo, SupportModules, VcsKind};

use std::collections::BTreeMap;

use crate::config::CopasConfig;
use crate::selection::Package;

use builtin::PACKAGE_DEFS;

/// Registry of all known packages.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: BTreeMap<Package, CatalogEntry>,
}

impl Catalog {
    /// Catalog with only the built-in definitions.
    pub fn builtin() -> Self {
        let entries = PACKAGE_DEFS
            .iter()
            .map(|def| {
                let entry = CatalogEntry {
                    package: def.package,
                    binary: def.binary_url.map(|url| BinaryArtifact {
                        url: url.to_string(),
                    }),
                    source: SourceRepo {
                        kind: def.vcs,
                        url: def.source_url.to_string(),
                        checkout_dir: def.checkout_dir.to_string(),
                    },
                    support: SupportModules {
                        required: to_strings(def.required_modules),
                        optional: to_strings(def.optional_modules),
                    },
                };
                (def.package, entry)
            })
            .collect();

        Self { entries }
    }

    /// Built-in catalog with the config's package overrides applied.
    pub fn from_config(config: &CopasConfig) -> Self {
        let mut catalog = Self::builtin();

        for (package, entry) in catalog.entries.iter_mut() {
            let Some(over) = config.package_override(*package) else {
                continue;
            };
            tracing::debug!("Applying config overrides for {}", package);

            if let Some(url) = &over.binary_url {
                entry.binary = Some(BinaryArtifact { url: url.clone() });
            }
            if let Some(url) = &over.source_url {
                entry.source.url = url.clone();
            }
            if let Some(modules) = &over.required_modules {
                entry.support.required = modules.clone();
            }
            if let Some(modules) = &over.optional_modules {
                entry.support.optional = modules.clone();
            }
        }

        catalog
    }

    /// Entry for `package`.
    pub fn get(&self, package: Package) -> &CatalogEntry {
        // Every variant has a definition; see `every_package_has_an_entry`.
        &self.entries[&package]
    }

    /// All entries in processing order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
