//! CoPAS - Community Packages for Atmospheric Science.
//!
//! CoPAS fetches a fixed catalog of scientific software packages into an
//! install root: binary tarballs are downloaded and unpacked, source
//! repositories are checked out with svn or git, and Python support modules
//! are verified.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`selection`] - Legacy tokens to an immutable installation plan
//! - [`catalog`] - Per-package sources, artifacts and support modules
//! - [`installer`] - The per-package install sequence
//! - [`fetch`] - HTTP downloads, tarball extraction, svn and git
//! - [`support`] - Python module availability checks
//! - [`config`] - `copas.yml` loading and environment credentials
//! - [`shell`] - External program execution
//! - [`ui`] - Spinners, progress bars and terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use copas::catalog::Catalog;
//! use copas::selection::{resolve, Resolution};
//!
//! let Resolution::Install(plan) = resolve(&["-S", "ADPAA"]) else {
//!     unreachable!()
//! };
//! let catalog = Catalog::builtin();
//! for package in plan.packages() {
//!     let entry = catalog.get(package);
//!     assert_eq!(entry.source.checkout_dir, "src");
//! }
//! assert!(!plan.fetch_binary());
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod installer;
pub mod selection;
pub mod shell;
pub mod support;
pub mod ui;

pub use error::{CopasError, Result};
