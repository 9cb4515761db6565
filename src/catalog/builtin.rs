//! Built-in package definitions.

use crate::selection::Package;

use super::entry::VcsKind;

/// Static definition of one package.
pub(super) struct PackageDef {
    pub package: Package,
    pub binary_url: Option<&'static str>,
    pub vcs: VcsKind,
    pub source_url: &'static str,
    pub checkout_dir: &'static str,
    pub required_modules: &'static [&'static str],
    pub optional_modules: &'static [&'static str],
}

/// Known packages, in processing order.
///
/// Repositories marked `unconfirmed` have no published upstream location we
/// could verify and need confirming against the projects; `copas.yml` can
/// point any package at another `source_url` in the meantime.
pub(super) const PACKAGE_DEFS: &[PackageDef] = &[
    PackageDef {
        package: Package::Adpaa,
        binary_url: Some("https://sourceforge.net/projects/adpaa/files/ADPAA.tar.gz"),
        vcs: VcsKind::Svn,
        source_url: "svn://svn.code.sf.net/p/adpaa/code/trunk/src",
        checkout_dir: "src",
        required_modules: &["numpy", "scipy", "matplotlib"],
        optional_modules: &["netCDF4", "pandas"],
    },
    PackageDef {
        package: Package::Adtae,
        binary_url: None,
        vcs: VcsKind::Git,
        // unconfirmed
        source_url: "https://github.com/ADPAA/ADTAE.git",
        checkout_dir: "ADTAE",
        required_modules: &[],
        optional_modules: &[],
    },
    PackageDef {
        package: Package::Aospy,
        binary_url: None,
        vcs: VcsKind::Git,
        source_url: "https://github.com/spencerahill/aospy.git",
        checkout_dir: "aospy",
        required_modules: &[],
        optional_modules: &[],
    },
    PackageDef {
        package: Package::Drilsdown,
        binary_url: None,
        vcs: VcsKind::Git,
        source_url: "https://github.com/Unidata/drilsdown.git",
        checkout_dir: "drilsdown",
        required_modules: &[],
        optional_modules: &[],
    },
    PackageDef {
        package: Package::Eufar,
        binary_url: None,
        vcs: VcsKind::Git,
        source_url: "https://github.com/EUFAR/egads.git",
        checkout_dir: "egads",
        required_modules: &[],
        optional_modules: &[],
    },
    PackageDef {
        package: Package::Lrose,
        binary_url: None,
        vcs: VcsKind::Git,
        source_url: "https://github.com/NCAR/lrose-core.git",
        checkout_dir: "lrose-core",
        required_modules: &[],
        optional_modules: &[],
    },
    PackageDef {
        package: Package::Miepython,
        binary_url: None,
        vcs: VcsKind::Git,
        source_url: "https://github.com/scottprahl/miepython.git",
        checkout_dir: "miepython",
        required_modules: &[],
        optional_modules: &[],
    },
    PackageDef {
        package: Package::Samac,
        binary_url: None,
        vcs: VcsKind::Git,
        // unconfirmed
        source_url: "https://github.com/samac-toolbox/samac.git",
        checkout_dir: "samac",
        required_modules: &[],
        optional_modules: &[],
    },
    PackageDef {
        package: Package::Simdata,
        binary_url: None,
        vcs: VcsKind::Git,
        // unconfirmed
        source_url: "https://github.com/ADPAA/SIMDATA.git",
        checkout_dir: "SIMDATA",
        required_modules: &[],
        optional_modules: &[],
    },
    PackageDef {
        package: Package::Soda,
        binary_url: None,
        vcs: VcsKind::Git,
        source_url: "https://github.com/abansemer/soda2.git",
        checkout_dir: "soda2",
        required_modules: &[],
        optional_modules: &[],
    },
    PackageDef {
        package: Package::Uiops,
        binary_url: None,
        vcs: VcsKind::Git,
        // unconfirmed
        source_url: "https://github.com/weiwu-meso/UIOPS.git",
        checkout_dir: "UIOPS",
        required_modules: &[],
        optional_modules: &[],
    },
];
