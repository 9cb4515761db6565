//! Fetching package content.
//!
//! - [`http`] - binary distribution downloads
//! - [`archive`] - tar.gz extraction
//! - [`vcs`] - clone-or-update over [`git`] and [`svn`]

pub mod archive;
pub mod git;
pub mod http;
pub mod svn;
pub mod vcs;

pub use archive::extract_tar_gz;
pub use git::GitClient;
pub use http::{HttpDownloader, PendingDownload, DEFAULT_TIMEOUT};
pub use svn::SvnClient;
pub use vcs::{client_for, sync_working_copy, SyncAction, VcsClient};
