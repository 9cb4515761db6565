//! Per-package installation.
//!
//! The [`Installer`] walks an [`InstallationPlan`] in package order and, for
//! each package, runs the same sequence driven by its [`CatalogEntry`]:
//!
//! 1. download the binary distribution and unpack it (when one is published)
//! 2. check out or update the source repository, when sources were requested
//!    or when no binary distribution is published
//! 3. verify the Python support modules (when the package lists any)
//!
//! The first failure stops the run; later packages are not attempted.

pub mod layout;

pub use layout::{Layout, STAGING_DIR_NAME};

use std::time::Duration;

use crate::catalog::{BinaryArtifact, Catalog, CatalogEntry};
use crate::config::Credentials;
use crate::error::{CopasError, Result};
use crate::fetch::{client_for, extract_tar_gz, sync_working_copy, HttpDownloader, SyncAction};
use crate::selection::{InstallationPlan, Package};
use crate::support::{ModuleFinder, SupportChecker};
use crate::ui::{format_bytes, UserInterface};

/// Settings that do not come from the plan.
#[derive(Debug, Clone)]
pub struct InstallSettings {
    /// Report what would happen without touching the network or disk.
    pub dry_run: bool,
    /// HTTP timeout; `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self {
            dry_run: false,
            timeout: Some(crate::fetch::DEFAULT_TIMEOUT),
        }
    }
}

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallSummary {
    /// Packages that completed, in processing order.
    pub completed: Vec<Package>,
    /// Binary archives downloaded.
    pub downloads: usize,
    /// Working copies created or updated.
    pub sources_synced: usize,
    /// Packages whose support modules were checked.
    pub support_checked: usize,
}

/// Executes installation plans.
pub struct Installer<'a, P: ModuleFinder> {
    catalog: &'a Catalog,
    layout: Layout,
    credentials: Credentials,
    checker: SupportChecker<P>,
    downloader: HttpDownloader,
    dry_run: bool,
}

impl<'a, P: ModuleFinder> Installer<'a, P> {
    pub fn new(
        catalog: &'a Catalog,
        layout: Layout,
        credentials: Credentials,
        finder: P,
        settings: &InstallSettings,
    ) -> Result<Self> {
        let downloader = HttpDownloader::with_timeout(settings.timeout)?;
        match downloader.timeout() {
            Some(timeout) => tracing::debug!("HTTP timeout: {}s", timeout.as_secs()),
            None => tracing::debug!("HTTP timeout disabled"),
        }
        Ok(Self {
            catalog,
            layout,
            credentials,
            checker: SupportChecker::new(finder),
            downloader,
            dry_run: settings.dry_run,
        })
    }

    /// Carry out `plan`.
    pub fn run(
        &mut self,
        plan: &InstallationPlan,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallSummary> {
        let mut summary = InstallSummary::default();

        if plan.check_only() {
            self.run_checks_only(plan, ui, &mut summary)?;
            return Ok(summary);
        }

        tracing::debug!(
            "Installing {} package(s) into {}",
            plan.package_count(),
            self.layout.root().display()
        );
        for package in plan.packages() {
            self.install_package(package, plan, ui, &mut summary)?;
            summary.completed.push(package);
        }

        Ok(summary)
    }

    fn run_checks_only(
        &mut self,
        plan: &InstallationPlan,
        ui: &mut dyn UserInterface,
        summary: &mut InstallSummary,
    ) -> Result<()> {
        if !plan.run_support_check() {
            ui.warning("Support checks are disabled by 'notesting'; nothing to do");
            return Ok(());
        }

        let catalog = self.catalog;
        for package in plan.packages() {
            let entry = catalog.get(package);
            if entry.support.is_empty() {
                tracing::debug!("{} has no support modules to check", package);
                continue;
            }
            ui.show_header(&format!("Checking {}", package));
            self.check_support(entry, ui)?;
            summary.support_checked += 1;
            summary.completed.push(package);
        }

        ui.success("Support checks complete");
        Ok(())
    }

    fn install_package(
        &mut self,
        package: Package,
        plan: &InstallationPlan,
        ui: &mut dyn UserInterface,
        summary: &mut InstallSummary,
    ) -> Result<()> {
        let catalog = self.catalog;
        let entry = catalog.get(package);
        ui.show_header(&format!("Working on {}", package));

        let mut sync_source = plan.fetch_source();
        if plan.fetch_binary() {
            match &entry.binary {
                Some(artifact) => {
                    if self.fetch_binary(package, artifact, ui)? {
                        summary.downloads += 1;
                    }
                }
                None => {
                    tracing::info!(
                        "No binary distribution is published for {}; installing its repository",
                        package
                    );
                    sync_source = true;
                }
            }
        }

        if sync_source && self.fetch_source(entry, ui)? {
            summary.sources_synced += 1;
        }

        if plan.run_support_check() && !entry.support.is_empty() {
            self.check_support(entry, ui)?;
            summary.support_checked += 1;
        }

        ui.success(&format!("Finished {}", package));
        Ok(())
    }

    /// Download and unpack the binary distribution. Returns whether anything
    /// was downloaded.
    fn fetch_binary(
        &mut self,
        package: Package,
        artifact: &BinaryArtifact,
        ui: &mut dyn UserInterface,
    ) -> Result<bool> {
        let archive = self.layout.artifact_path(package, artifact);
        let package_dir = self.layout.package_dir(package);

        if self.dry_run {
            ui.message(&format!(
                "  [dry-run] Would download {} to {}",
                artifact.url,
                archive.display()
            ));
            ui.message(&format!(
                "  [dry-run] Would extract {} into {}",
                artifact.file_name(),
                package_dir.display()
            ));
            return Ok(false);
        }

        std::fs::create_dir_all(self.layout.staging_dir(package))?;

        let pending = self.downloader.open(&artifact.url)?;
        let total = pending.content_length();
        let size = total.map_or_else(|| "unknown".to_string(), |n| n.to_string());
        ui.message(&format!(
            "  Downloading {} Binary Version: {} Bytes: {}",
            package,
            artifact.file_name(),
            size
        ));

        let mut transfer = ui.start_transfer(&format!("Downloading {}", artifact.file_name()), total);
        match pending.save_to(&archive, |bytes| transfer.set_position(bytes)) {
            Ok(bytes) => {
                tracing::info!("Downloaded {} ({} bytes)", artifact.url, bytes);
                transfer.finish(&format!(
                    "Downloaded {} ({})",
                    artifact.file_name(),
                    format_bytes(bytes)
                ));
            }
            Err(e) => {
                transfer.abandon(&format!("Download of {} failed", artifact.file_name()));
                return Err(e);
            }
        }

        let mut spinner = ui.start_spinner(&format!(
            "Extracting {} distribution from compressed tar file",
            package
        ));
        match extract_tar_gz(&archive, &package_dir) {
            Ok(()) => spinner.finish_success(&format!("Extracted {}", artifact.file_name())),
            Err(e) => {
                spinner.finish_error(&format!("Could not extract {}", artifact.file_name()));
                return Err(e);
            }
        }

        Ok(true)
    }

    /// Check out or update the source repository. Returns whether a VCS
    /// command ran.
    fn fetch_source(&mut self, entry: &CatalogEntry, ui: &mut dyn UserInterface) -> Result<bool> {
        let dest = self.layout.source_dir(entry);
        let url = entry.source.url_for(&self.credentials);
        let program = entry.source.kind.program();
        let action = if dest.exists() { "update" } else { "fetch" };

        if self.dry_run {
            ui.message(&format!(
                "  [dry-run] Would {} {} source from {} into {} using {}",
                action,
                entry.package,
                url,
                dest.display(),
                program
            ));
            return Ok(false);
        }

        let verbose = ui.output_mode().shows_command_output();
        let client = client_for(entry.source.kind, !verbose);

        if verbose {
            ui.message(&format!("  {} {} source using {}", title(action), entry.package, program));
            sync_working_copy(client.as_ref(), &url, &dest)?;
            return Ok(true);
        }

        let mut spinner =
            ui.start_spinner(&format!("{} {} source using {}", title(action), entry.package, program));
        match sync_working_copy(client.as_ref(), &url, &dest) {
            Ok(SyncAction::Initialized) => {
                spinner.finish_success(&format!("Checked out {} into {}", entry.package, dest.display()))
            }
            Ok(SyncAction::Updated) => {
                spinner.finish_success(&format!("Updated {} in {}", entry.package, dest.display()))
            }
            Err(e) => {
                spinner.finish_error(&format!("{} {} failed", program, action));
                return Err(e);
            }
        }

        Ok(true)
    }

    /// Verify support modules. Missing optional modules warn; a missing
    /// required module stops the run.
    fn check_support(&mut self, entry: &CatalogEntry, ui: &mut dyn UserInterface) -> Result<()> {
        let package = entry.package;

        if self.dry_run {
            let modules: Vec<&str> = entry
                .support
                .required
                .iter()
                .chain(&entry.support.optional)
                .map(String::as_str)
                .collect();
            ui.message(&format!(
                "  [dry-run] Would check Python modules for {}: {}",
                package,
                modules.join(", ")
            ));
            return Ok(());
        }

        let report = self.checker.check(entry);

        for module in report.missing_optional() {
            ui.warning(&format!(
                "Optional Python module '{}' is not installed; some {} features will be unavailable",
                module, package
            ));
        }

        if let Some(module) = report.missing_required().next() {
            return Err(CopasError::RequiredModuleMissing {
                package: package.to_string(),
                module: module.to_string(),
            });
        }

        ui.success(&format!("Required Python modules for {} are installed", package));
        Ok(())
    }
}

fn title(action: &str) -> String {
    let mut chars = action.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CopasConfig, PackageOverride};
    use crate::selection::{resolve, Resolution};
    use crate::ui::MockUI;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    struct FakeFinder(Vec<&'static str>);

    impl ModuleFinder for FakeFinder {
        fn is_importable(&self, module: &str) -> bool {
            self.0.contains(&module)
        }
    }

    fn all_modules() -> FakeFinder {
        FakeFinder(vec!["numpy", "scipy", "matplotlib", "netCDF4", "pandas"])
    }

    fn plan(args: &[&str]) -> InstallationPlan {
        match resolve(args) {
            Resolution::Install(plan) => plan,
            Resolution::Help => panic!("unexpected help for {:?}", args),
        }
    }

    fn dry_run() -> InstallSettings {
        InstallSettings {
            dry_run: true,
            ..Default::default()
        }
    }

    fn tarball(files: &[(&str, &str)]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, content) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, name, content.as_bytes())
                .unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    /// Catalog where ADPAA's binary comes from `server` and no package has
    /// a reachable source repository.
    fn catalog_with_binary(server: &MockServer) -> Catalog {
        let mut config = CopasConfig::default();
        config.packages.insert(
            "ADPAA".to_string(),
            PackageOverride {
                binary_url: Some(server.url("/ADPAA.tar.gz")),
                ..Default::default()
            },
        );
        Catalog::from_config(&config)
    }

    #[test]
    fn title_capitalizes_first_letter() {
        assert_eq!(title("fetch"), "Fetch");
        assert_eq!(title(""), "");
    }

    #[test]
    fn dry_run_visits_packages_in_order() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            all_modules(),
            &dry_run(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        let summary = installer.run(&plan(&["SODA", "ADPAA"]), &mut ui).unwrap();

        assert_eq!(summary.completed, vec![Package::Adpaa, Package::Soda]);
        assert_eq!(summary.downloads, 0);
        assert_eq!(summary.sources_synced, 0);
        assert_eq!(
            ui.headers(),
            ["Working on ADPAA".to_string(), "Working on SODA".to_string()]
        );
        assert!(ui.has_success("Finished ADPAA"));
        assert!(ui.has_success("Finished SODA"));
        assert!(ui.has_message("ADPAA.tar.gz"));
        assert!(!ui.has_message("svn"));
        assert!(ui.has_message(
            "Would fetch SODA source from https://github.com/abansemer/soda2.git"
        ));
        assert!(ui.has_message("Would check Python modules for ADPAA: numpy"));
        assert!(!temp.path().join("ADPAA").exists());
    }

    #[test]
    fn source_only_skips_binary() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            all_modules(),
            &dry_run(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        installer.run(&plan(&["-S", "ADPAA"]), &mut ui).unwrap();

        assert!(!ui.has_message("ADPAA.tar.gz"));
        assert!(ui.has_message("svn"));
    }

    #[test]
    fn binaries_only_by_default() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            all_modules(),
            &dry_run(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        installer.run(&plan(&["ADPAA"]), &mut ui).unwrap();

        assert!(ui.has_message("ADPAA.tar.gz"));
        assert!(!ui.has_message("svn"));
    }

    #[test]
    fn check_only_runs_support_checks_and_nothing_else() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            all_modules(),
            &InstallSettings::default(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        let summary = installer.run(&plan(&["-t"]), &mut ui).unwrap();

        assert_eq!(summary.completed, vec![Package::Adpaa]);
        assert_eq!(summary.support_checked, 1);
        assert_eq!(summary.downloads, 0);
        assert!(ui.has_header("Checking ADPAA"));
        assert!(!ui.has_header("Working on"));
        assert!(ui.has_success("Support checks complete"));
        assert!(std::fs::read_dir(temp.path()).unwrap().next().is_none());
    }

    #[test]
    fn check_only_with_notesting_does_nothing() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            FakeFinder(vec![]),
            &InstallSettings::default(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        let summary = installer.run(&plan(&["-t", "notesting"]), &mut ui).unwrap();

        assert!(summary.completed.is_empty());
        assert!(ui.has_warning("nothing to do"));
    }

    #[test]
    fn missing_optional_module_warns() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            FakeFinder(vec!["numpy", "scipy", "matplotlib"]),
            &InstallSettings::default(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        installer.run(&plan(&["-t", "ADPAA"]), &mut ui).unwrap();

        assert!(ui.has_warning("'netCDF4'"));
        assert!(ui.has_warning("'pandas'"));
        assert!(ui.has_success("Required Python modules for ADPAA are installed"));
    }

    #[test]
    fn missing_required_module_stops_the_run() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            FakeFinder(vec!["numpy", "matplotlib"]),
            &InstallSettings::default(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        let err = installer.run(&plan(&["-t", "ADPAA"]), &mut ui).unwrap_err();

        match err {
            CopasError::RequiredModuleMissing { package, module } => {
                assert_eq!(package, "ADPAA");
                assert_eq!(module, "scipy");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn downloads_and_extracts_binary() {
        let server = MockServer::start();
        let body = tarball(&[("bin/process_data", "#!/bin/sh\n"), ("README", "ADPAA\n")]);
        let mock = server.mock(|when, then| {
            when.method(GET).path("/ADPAA.tar.gz");
            then.status(200).body(body.clone());
        });

        let temp = TempDir::new().unwrap();
        let catalog = catalog_with_binary(&server);
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            all_modules(),
            &InstallSettings::default(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        let summary = installer
            .run(&plan(&["notesting", "ADPAA"]), &mut ui)
            .unwrap();

        mock.assert();
        assert_eq!(summary.downloads, 1);
        assert_eq!(summary.completed, vec![Package::Adpaa]);

        let adpaa = temp.path().join("ADPAA");
        assert!(adpaa.join("binary_distributions/ADPAA.tar.gz").is_file());
        assert_eq!(
            std::fs::read_to_string(adpaa.join("README")).unwrap(),
            "ADPAA\n"
        );
        assert!(adpaa.join("bin/process_data").is_file());

        let size = body.len() as u64;
        assert!(ui.has_message(&format!(
            "Downloading ADPAA Binary Version: ADPAA.tar.gz Bytes: {}",
            size
        )));
        assert_eq!(ui.transfer_positions().last(), Some(&size));
        assert_eq!(
            ui.transfer_outcomes(),
            vec![format!("Downloaded ADPAA.tar.gz ({})", format_bytes(size))]
        );
        assert!(ui.has_success("Finished ADPAA"));
    }

    #[test]
    fn failed_download_stops_before_later_packages() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ADPAA.tar.gz");
            then.status(404);
        });

        let temp = TempDir::new().unwrap();
        let catalog = catalog_with_binary(&server);
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            all_modules(),
            &InstallSettings::default(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        let err = installer
            .run(&plan(&["ADPAA", "SODA"]), &mut ui)
            .unwrap_err();

        assert!(matches!(err, CopasError::DownloadFailed { .. }));
        assert!(ui.has_header("Working on ADPAA"));
        assert!(!ui.has_header("Working on SODA"));
        assert!(!ui.has_success("Finished ADPAA"));
    }

    #[test]
    fn corrupt_archive_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ADPAA.tar.gz");
            then.status(200).body("not a tarball");
        });

        let temp = TempDir::new().unwrap();
        let catalog = catalog_with_binary(&server);
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            all_modules(),
            &InstallSettings::default(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        let err = installer
            .run(&plan(&["notesting", "ADPAA"]), &mut ui)
            .unwrap_err();

        assert!(matches!(err, CopasError::ExtractFailed { .. }));
    }

    #[test]
    fn packages_without_binary_install_their_repository() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            all_modules(),
            &dry_run(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        let summary = installer.run(&plan(&["SODA", "LROSE"]), &mut ui).unwrap();

        assert_eq!(summary.completed, vec![Package::Lrose, Package::Soda]);
        assert_eq!(ui.messages().len(), 2);
        assert!(ui.has_message(
            "Would fetch LROSE source from https://github.com/NCAR/lrose-core.git"
        ));
        assert!(ui.has_message("lrose-core using git"));
        assert!(ui.has_message("Would fetch SODA source"));
        assert!(ui.has_success("Finished LROSE"));
    }

    #[test]
    fn source_request_does_not_sync_twice() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            all_modules(),
            &dry_run(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        installer.run(&plan(&["-s", "SODA"]), &mut ui).unwrap();

        assert_eq!(ui.messages().len(), 1);
    }

    #[test]
    fn nobinary_without_source_fetches_nothing() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            all_modules(),
            &dry_run(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        let summary = installer.run(&plan(&["nobinary", "LROSE"]), &mut ui).unwrap();

        assert_eq!(summary.completed, vec![Package::Lrose]);
        assert!(ui.messages().is_empty());
        assert!(ui.has_success("Finished LROSE"));
    }

    #[test]
    fn credentials_flow_into_source_urls() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        let credentials = Credentials {
            svn_username: Some("jdoe".to_string()),
            github_username: Some("octo".to_string()),
        };
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            credentials,
            all_modules(),
            &dry_run(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        installer
            .run(&plan(&["-S", "notesting", "ADPAA", "SODA"]), &mut ui)
            .unwrap();

        assert!(ui.has_message("svn+ssh://jdoe@svn.code.sf.net"));
        assert!(ui.has_message("https://octo@github.com/"));
    }

    #[test]
    fn existing_working_copy_is_updated() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::builtin();
        std::fs::create_dir_all(temp.path().join("SODA/soda2")).unwrap();
        let mut installer = Installer::new(
            &catalog,
            Layout::new(temp.path()),
            Credentials::default(),
            all_modules(),
            &dry_run(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        installer.run(&plan(&["-S", "SODA"]), &mut ui).unwrap();

        assert!(ui.has_message("Would update SODA source"));
    }
}
