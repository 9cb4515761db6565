//! Working-copy management shared by the git and svn clients.

use std::ffi::OsString;
use std::path::Path;

use crate::catalog::VcsKind;
use crate::error::Result;
use crate::shell::{run_checked, CommandOptions};

use super::git::GitClient;
use super::svn::SvnClient;

/// What [`sync_working_copy`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// The working copy did not exist and was cloned/checked out.
    Initialized,
    /// The working copy existed and was updated in place.
    Updated,
}

/// A version-control client driven through its command-line program.
pub trait VcsClient {
    /// Which system this client talks to.
    fn kind(&self) -> VcsKind;

    /// Arguments that create a working copy of `url` at `dest`.
    fn init_args(&self, url: &str, dest: &Path) -> Vec<OsString>;

    /// Arguments that update an existing working copy (run inside it).
    fn update_args(&self) -> Vec<OsString>;

    /// Whether program output is captured rather than shown.
    fn captures_output(&self) -> bool;

    /// Create a working copy of `url` at `dest`.
    fn initialize(&self, url: &str, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let options = CommandOptions {
            cwd: None,
            capture: self.captures_output(),
        };
        run_checked(self.kind().program(), &self.init_args(url, dest), &options)?;
        Ok(())
    }

    /// Update the working copy at `dest` in place.
    fn update(&self, dest: &Path) -> Result<()> {
        let options = CommandOptions {
            cwd: None,
            capture: self.captures_output(),
        }
        .in_dir(dest);
        run_checked(self.kind().program(), &self.update_args(), &options)?;
        Ok(())
    }
}

/// Client for `kind`.
pub fn client_for(kind: VcsKind, capture: bool) -> Box<dyn VcsClient> {
    match kind {
        VcsKind::Git => Box::new(GitClient::new(capture)),
        VcsKind::Svn => Box::new(SvnClient::new(capture)),
    }
}

/// Initialize `dest` from `url` if it does not exist, otherwise update it.
pub fn sync_working_copy(client: &dyn VcsClient, url: &str, dest: &Path) -> Result<SyncAction> {
    if dest.exists() {
        tracing::info!("Updating {}", dest.display());
        client.update(dest)?;
        Ok(SyncAction::Updated)
    } else {
        tracing::info!("Fetching {} into {}", url, dest.display());
        client.initialize(url, dest)?;
        Ok(SyncAction::Initialized)
    }
}
