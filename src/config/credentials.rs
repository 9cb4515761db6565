//! Version-control account names taken from the environment.
//!
//! When a username is set, authenticated URLs are used for checkouts and
//! clones; otherwise the anonymous ones are.

/// Subversion account used for `svn+ssh` checkouts.
pub const SVN_USERNAME_VAR: &str = "SVN_USERNAME";

/// GitHub account used for authenticated HTTPS clones.
pub const GITHUB_USERNAME_VAR: &str = "GITHUB_USERNAME";

/// Account names for the version-control hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub svn_username: Option<String>,
    pub github_username: Option<String>,
}

impl Credentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key: &str| std::env::var(key))
    }

    /// Read credentials through a custom lookup function.
    ///
    /// Blank values count as unset.
    pub fn from_env_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let lookup = |key: &str| {
            env_fn(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            svn_username: lookup(SVN_USERNAME_VAR),
            github_username: lookup(GITHUB_USERNAME_VAR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn empty_environment_is_anonymous() {
        let creds = Credentials::from_env_with(env(&[]));
        assert_eq!(creds, Credentials::default());
    }

    #[test]
    fn reads_both_usernames() {
        let creds = Credentials::from_env_with(env(&[
            (SVN_USERNAME_VAR, "delene"),
            (GITHUB_USERNAME_VAR, "octocat"),
        ]));
        assert_eq!(creds.svn_username.as_deref(), Some("delene"));
        assert_eq!(creds.github_username.as_deref(), Some("octocat"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let creds = Credentials::from_env_with(env(&[(SVN_USERNAME_VAR, "   ")]));
        assert!(creds.svn_username.is_none());
    }
}
