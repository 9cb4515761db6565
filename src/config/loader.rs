//! Configuration file discovery and loading.
//!
//! An explicitly requested file must exist. Without one, `copas.yml` in the
//! working directory is used when present, and built-in defaults otherwise.

use crate::config::schema::CopasConfig;
use crate::error::{CopasError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "copas.yml";

/// Find `copas.yml` in `dir`.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load configuration.
///
/// `explicit` comes from `--config` and must point at an existing file.
/// Otherwise `cwd` is searched and a missing file means defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<CopasConfig> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(CopasError::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => path.to_path_buf(),
        None => match discover_config(cwd) {
            Some(path) => path,
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(CopasConfig::default());
            }
        },
    };

    let content = fs::read_to_string(&path)?;
    let config = parse_config(&content, &path)?;
    tracing::debug!("Loaded config from {}", path.display());

    for key in config.unknown_package_keys() {
        tracing::warn!("Ignoring unknown package '{}' in {}", key, path.display());
    }

    Ok(config)
}

/// Parse YAML content into a [`CopasConfig`].
///
/// `path` is only used for error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<CopasConfig> {
    if content.trim().is_empty() {
        return Ok(CopasConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| CopasError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
