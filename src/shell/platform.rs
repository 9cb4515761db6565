//! Platform and environment detection.

/// Environment variables set by common CI providers.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    is_ci_with(|key| std::env::var(key).is_ok())
}

/// CI detection through a custom lookup, for testing.
pub fn is_ci_with<F>(is_set: F) -> bool
where
    F: Fn(&str) -> bool,
{
    CI_VARS.iter().any(|var| is_set(var))
}
