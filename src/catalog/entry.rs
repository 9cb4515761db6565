//! Catalog entry types.

use crate::config::Credentials;
use crate::selection::Package;

/// A prebuilt gzip tarball for a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryArtifact {
    /// Where to download the tarball from.
    pub url: String,
}

impl BinaryArtifact {
    /// Local file name: the last path segment of the URL.
    pub fn file_name(&self) -> &str {
        let path = self.url.split(['?', '#']).next().unwrap_or(&self.url);
        path.rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or("download.tar.gz")
    }
}

/// Version-control system hosting a package's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsKind {
    /// Decentralized: clone, then pull to update.
    Git,
    /// Centralized: checkout, then update in place.
    Svn,
}

impl VcsKind {
    /// Client executable name.
    pub fn program(self) -> &'static str {
        match self {
            VcsKind::Git => "git",
            VcsKind::Svn => "svn",
        }
    }
}

/// Where a package's source tree lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRepo {
    pub kind: VcsKind,
    /// Anonymous URL.
    pub url: String,
    /// Working-copy directory name inside the package directory.
    pub checkout_dir: String,
}

impl SourceRepo {
    /// URL to fetch from, authenticated when a matching username is set.
    ///
    /// Subversion `svn://` URLs become `svn+ssh://<user>@...`; GitHub HTTPS
    /// URLs become `https://<user>@github.com/...`. Anything else is used as
    /// written.
    pub fn url_for(&self, credentials: &Credentials) -> String {
        match self.kind {
            VcsKind::Svn => match (&credentials.svn_username, self.url.strip_prefix("svn://")) {
                (Some(user), Some(rest)) => format!("svn+ssh://{}@{}", user, rest),
                _ => self.url.clone(),
            },
            VcsKind::Git => {
                match (
                    &credentials.github_username,
                    self.url.strip_prefix("https://github.com/"),
                ) {
                    (Some(user), Some(rest)) => format!("https://{}@github.com/{}", user, rest),
                    _ => self.url.clone(),
                }
            }
        }
    }
}

/// Python modules a package needs at run time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportModules {
    /// Missing any of these is fatal.
    pub required: Vec<String>,
    /// Missing any of these only degrades functionality.
    pub optional: Vec<String>,
}

impl SupportModules {
    /// Whether there is nothing to check.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }
}

/// Everything the installer needs to know about one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub package: Package,
    /// Binary distribution, if the project publishes one.
    pub binary: Option<BinaryArtifact>,
    pub source: SourceRepo,
    pub support: SupportModules,
}
