//! Library integration tests.

use copas::catalog::{Catalog, VcsKind};
use copas::config::{parse_config, Credentials};
use copas::installer::{InstallSettings, Installer, Layout};
use copas::selection::{resolve, InstallationPlan, Package, Resolution};
use copas::support::ModuleFinder;
use copas::ui::MockUI;
use copas::CopasError;
use std::path::Path;

fn plan(args: &[&str]) -> InstallationPlan {
    match resolve(args) {
        Resolution::Install(plan) => plan,
        Resolution::Help => panic!("unexpected help for {:?}", args),
    }
}

struct NothingInstalled;

impl ModuleFinder for NothingInstalled {
    fn is_importable(&self, _module: &str) -> bool {
        false
    }
}

#[test]
fn error_types_are_public() {
    let err = CopasError::RequiredModuleMissing {
        package: "ADPAA".into(),
        module: "numpy".into(),
    };
    assert!(err.to_string().contains("numpy"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> copas::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use copas::cli::Cli;

    let cli = Cli::parse_from(["copas", "--dry-run", "-S", "SODA"]);
    assert!(cli.dry_run);
    assert_eq!(cli.tokens, vec!["-S", "SODA"]);
}

#[test]
fn resolver_handles_mixed_case_tokens() {
    let plan = plan(&["soda", "UIOPS", "Lrose"]);
    assert_eq!(
        plan.packages().collect::<Vec<_>>(),
        vec![Package::Soda, Package::Uiops]
    );
}

#[test]
fn resolver_full_scenario() {
    let plan = plan(&["notesting", "-S", "adpaa", "nobinary", "SAMAC", "--bogus"]);
    assert!(plan.includes(Package::Adpaa));
    assert!(plan.includes(Package::Samac));
    assert_eq!(plan.package_count(), 2);
    assert!(plan.fetch_source());
    assert!(!plan.fetch_binary());
    assert!(!plan.run_support_check());
    assert!(!plan.check_only());
}

#[test]
fn config_overrides_flow_into_catalog() {
    let config = parse_config(
        r#"
packages:
  SODA:
    source_url: https://git.example.org/soda2.git
"#,
        Path::new("copas.yml"),
    )
    .unwrap();
    let catalog = Catalog::from_config(&config);
    let soda = catalog.get(Package::Soda);

    assert_eq!(soda.source.kind, VcsKind::Git);
    assert_eq!(soda.source.url, "https://git.example.org/soda2.git");
}

#[test]
fn missing_required_module_is_fatal_for_adpaa_only() {
    let temp = tempfile::TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let mut installer = Installer::new(
        &catalog,
        Layout::new(temp.path()),
        Credentials::default(),
        NothingInstalled,
        &InstallSettings::default(),
    )
    .unwrap();
    let mut ui = MockUI::new();

    let summary = installer.run(&plan(&["-t", "SODA", "EUFAR"]), &mut ui).unwrap();
    assert!(summary.completed.is_empty());

    let err = installer.run(&plan(&["-t", "ADPAA"]), &mut ui).unwrap_err();
    assert!(matches!(err, CopasError::RequiredModuleMissing { .. }));
}
