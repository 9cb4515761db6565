//! Git working copies: clone once, pull afterwards.

use std::ffi::OsString;
use std::path::Path;

use crate::catalog::VcsKind;

use super::vcs::VcsClient;

/// Drives the `git` program.
#[derive(Debug, Clone)]
pub struct GitClient {
    capture: bool,
}

impl GitClient {
    /// Create a client; `capture` hides git's own output.
    pub fn new(capture: bool) -> Self {
        Self { capture }
    }
}

impl VcsClient for GitClient {
    fn kind(&self) -> VcsKind {
        VcsKind::Git
    }

    fn init_args(&self, url: &str, dest: &Path) -> Vec<OsString> {
        vec!["clone".into(), url.into(), dest.as_os_str().to_owned()]
    }

    fn update_args(&self) -> Vec<OsString> {
        vec!["pull".into()]
    }

    fn captures_output(&self) -> bool {
        self.capture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::vcs::{sync_working_copy, SyncAction};
    use std::path::PathBuf;
    use std::process::Command;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Serialize git-process tests to avoid flaky failures under parallel execution
    static GIT_LOCK: Mutex<()> = Mutex::new(());

    fn git(args: &[&str], cwd: &Path) {
        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Create a bare repository with one commit containing `README`.
    fn create_bare_repo(parent: &Path) -> PathBuf {
        let bare = parent.join("soda2.git");
        let work = parent.join("seed");
        std::fs::create_dir_all(&work).unwrap();

        git(
            &["init", "--bare", "--initial-branch=main", bare.to_str().unwrap()],
            parent,
        );
        git(&["clone", bare.to_str().unwrap(), work.to_str().unwrap()], parent);
        git(&["config", "user.name", "Test"], &work);
        git(&["config", "user.email", "test@test.com"], &work);

        std::fs::write(work.join("README"), "SODA\n").unwrap();
        git(&["add", "."], &work);
        git(&["commit", "-m", "Initial commit"], &work);
        git(&["push", "origin", "HEAD:main"], &work);

        bare
    }

    fn push_file(parent: &Path, bare: &Path, name: &str) {
        let work = parent.join("pusher");
        git(&["clone", bare.to_str().unwrap(), work.to_str().unwrap()], parent);
        git(&["config", "user.name", "Test"], &work);
        git(&["config", "user.email", "test@test.com"], &work);
        std::fs::write(work.join(name), "update\n").unwrap();
        git(&["add", "."], &work);
        git(&["commit", "-m", "Second commit"], &work);
        git(&["push", "origin", "HEAD:main"], &work);
    }

    #[test]
    fn clone_and_pull_arguments() {
        let client = GitClient::new(true);
        assert_eq!(
            client.init_args("https://github.com/abansemer/soda2.git", Path::new("SODA/soda2")),
            vec![
                OsString::from("clone"),
                OsString::from("https://github.com/abansemer/soda2.git"),
                OsString::from("SODA/soda2"),
            ]
        );
        assert_eq!(client.update_args(), vec![OsString::from("pull")]);
    }

    #[test]
    fn clones_missing_working_copy() {
        let _lock = GIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp = TempDir::new().unwrap();
        let bare = create_bare_repo(temp.path());
        let dest = temp.path().join("SODA").join("soda2");

        let action =
            sync_working_copy(&GitClient::new(true), bare.to_str().unwrap(), &dest).unwrap();

        assert_eq!(action, SyncAction::Initialized);
        assert!(dest.join("README").is_file());
    }

    #[test]
    fn pulls_existing_working_copy() {
        let _lock = GIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp = TempDir::new().unwrap();
        let bare = create_bare_repo(temp.path());
        let dest = temp.path().join("SODA").join("soda2");
        let client = GitClient::new(true);

        sync_working_copy(&client, bare.to_str().unwrap(), &dest).unwrap();
        push_file(temp.path(), &bare, "CHANGELOG");

        let action = sync_working_copy(&client, bare.to_str().unwrap(), &dest).unwrap();

        assert_eq!(action, SyncAction::Updated);
        assert!(dest.join("CHANGELOG").is_file());
    }

    #[test]
    fn clone_failure_propagates() {
        let _lock = GIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("UIOPS");

        let result = sync_working_copy(&GitClient::new(true), "/nonexistent/repo.git", &dest);

        assert!(matches!(
            result,
            Err(crate::error::CopasError::CommandFailed { .. })
        ));
    }
}
