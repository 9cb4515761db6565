//! The fixed set of installable packages.

use serde::Serialize;
use std::fmt;

/// A named scientific software package copas knows how to fetch.
///
/// Variant order is the processing order: the installer walks packages in
/// the order they are declared here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Package {
    /// Airborne Data Processing and Analysis.
    Adpaa,
    /// Airborne Data Testing and Evaluation.
    Adtae,
    /// Automated analysis of gridded climate data.
    Aospy,
    /// Drilsdown notebooks for IDV.
    Drilsdown,
    /// EUFAR General Airborne Data-processing Software (EGADS).
    Eufar,
    /// Lidar Radar Open Software Environment.
    Lrose,
    /// Mie scattering calculations.
    Miepython,
    /// Software for Airborne Measurements of Aerosol and Clouds.
    Samac,
    /// Simulated cloud particle instrument data.
    Simdata,
    /// System for OAP Data Analysis.
    Soda,
    /// University of Illinois OAP Processing Software.
    Uiops,
}

impl Package {
    /// Every package, in processing order.
    pub const ALL: [Package; 11] = [
        Package::Adpaa,
        Package::Adtae,
        Package::Aospy,
        Package::Drilsdown,
        Package::Eufar,
        Package::Lrose,
        Package::Miepython,
        Package::Samac,
        Package::Simdata,
        Package::Soda,
        Package::Uiops,
    ];

    /// Canonical upper-case name, also used as the package directory name.
    pub fn name(self) -> &'static str {
        match self {
            Package::Adpaa => "ADPAA",
            Package::Adtae => "ADTAE",
            Package::Aospy => "AOSPY",
            Package::Drilsdown => "DRILSDOWN",
            Package::Eufar => "EUFAR",
            Package::Lrose => "LROSE",
            Package::Miepython => "MIEPYTHON",
            Package::Samac => "SAMAC",
            Package::Simdata => "SIMDATA",
            Package::Soda => "SODA",
            Package::Uiops => "UIOPS",
        }
    }

    /// Look up a package from a command-line token.
    ///
    /// Only the all-upper (`SODA`) and all-lower (`soda`) spellings match;
    /// mixed case such as `Soda` is not a package token.
    pub fn from_token(token: &str) -> Option<Package> {
        let canonical = token.to_ascii_uppercase();
        let package = Package::ALL
            .into_iter()
            .find(|p| p.name() == canonical)?;

        if token == canonical || token == canonical.to_ascii_lowercase() {
            Some(package)
        } else {
            None
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
