//! Package selection from the command line.
//!
//! - [`package`] - The [`Package`] enum and its token lookup
//! - [`plan`] - [`resolve`] and the immutable [`InstallationPlan`] it produces
//!
//! # Example
//!
//! ```
//! use copas::selection::{resolve, Package, Resolution};
//!
//! let Resolution::Install(plan) = resolve(&["-s", "SODA"]) else {
//!     unreachable!()
//! };
//! assert_eq!(plan.packages().collect::<Vec<_>>(), vec![Package::Soda]);
//! assert!(plan.fetch_source());
//! assert!(plan.fetch_binary());
//! ```

pub mod package;
pub mod plan;

pub use package::Package;
pub use plan::{resolve, InstallationPlan, Resolution};
