//! Error types for copas operations.
//!
//! This module defines [`CopasError`], the primary error type used throughout
//! the installer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing *optional* support module is not an error; it is reported as a
//!   warning by the installer and execution continues
//! - A missing *required* support module is [`CopasError::RequiredModuleMissing`]
//!   and stops the whole run
//! - Network, archive and version-control failures propagate unchanged to
//!   `main`, which reports them and exits non-zero
//! - Fetcher internals use `anyhow::Error`, wrapped via [`CopasError::Other`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for copas operations.
#[derive(Debug, Error)]
pub enum CopasError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Downloading a binary distribution failed.
    #[error("Download of {url} failed: {message}")]
    DownloadFailed { url: String, message: String },

    /// Unpacking a binary distribution failed.
    #[error("Failed to extract {archive}: {message}")]
    ExtractFailed { archive: PathBuf, message: String },

    /// External command (git, svn, python) failed or could not be started.
    #[error("Command failed ({reason}): {command}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        reason: String,
    },

    /// A support module the package cannot run without is not importable.
    #[error("{package} requires the '{module}' Python module, which is not installed")]
    RequiredModuleMissing { package: String, module: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for copas operations.
pub type Result<T> = std::result::Result<T, CopasError>;
