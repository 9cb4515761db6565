//! Subversion working copies: checkout once, update afterwards.

use std::ffi::OsString;
use std::path::Path;

use crate::catalog::VcsKind;

use super::vcs::VcsClient;

/// Drives the `svn` program.
#[derive(Debug, Clone)]
pub struct SvnClient {
    capture: bool,
}

impl SvnClient {
    /// Create a client; `capture` hides svn's own output.
    pub fn new(capture: bool) -> Self {
        Self { capture }
    }
}

impl VcsClient for SvnClient {
    fn kind(&self) -> VcsKind {
        VcsKind::Svn
    }

    fn init_args(&self, url: &str, dest: &Path) -> Vec<OsString> {
        vec!["checkout".into(), url.into(), dest.as_os_str().to_owned()]
    }

    fn update_args(&self) -> Vec<OsString> {
        vec!["update".into()]
    }

    fn captures_output(&self) -> bool {
        self.capture
    }
}
