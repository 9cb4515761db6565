//! Configuration loading.
//!
//! - [`schema`] - `copas.yml` structure
//! - [`loader`] - file discovery and parsing
//! - [`credentials`] - VCS usernames from the environment

pub mod credentials;
pub mod loader;
pub mod schema;

pub use credentials::{Credentials, GITHUB_USERNAME_VAR, SVN_USERNAME_VAR};
pub use loader::{discover_config, load_config, parse_config, CONFIG_FILE_NAME};
pub use schema::{CopasConfig, OutputMode, PackageOverride};
