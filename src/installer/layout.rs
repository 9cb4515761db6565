//! On-disk layout of an install root.
//!
//! ```text
//! <root>/
//!   ADPAA/
//!     binary_distributions/ADPAA.tar.gz   downloaded artifact
//!     src/                                svn working copy
//!     ...                                 unpacked distribution
//!   SODA/
//!     soda2/                              git working copy
//! ```

use std::path::{Path, PathBuf};

use crate::catalog::{BinaryArtifact, CatalogEntry};
use crate::selection::Package;

/// Name of the per-package directory that holds downloaded archives.
pub const STAGING_DIR_NAME: &str = "binary_distributions";

/// Paths derived from the install root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The install root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Top-level directory of `package`; binaries are unpacked here.
    pub fn package_dir(&self, package: Package) -> PathBuf {
        self.root.join(package.name())
    }

    /// Where downloaded archives for `package` are kept.
    pub fn staging_dir(&self, package: Package) -> PathBuf {
        self.package_dir(package).join(STAGING_DIR_NAME)
    }

    /// Local path of a downloaded artifact.
    pub fn artifact_path(&self, package: Package, artifact: &BinaryArtifact) -> PathBuf {
        self.staging_dir(package).join(artifact.file_name())
    }

    /// Working copy of the package's source repository.
    pub fn source_dir(&self, entry: &CatalogEntry) -> PathBuf {
        self.package_dir(entry.package)
            .join(&entry.source.checkout_dir)
    }
}
