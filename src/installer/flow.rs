//! Setup flow orchestration
//!
//! Runs the checks in a fixed order, stopping at the first fatal one:
//!
//! 1. version (never fatal)
//! 2. platform
//! 3. requirements, installing what is missing
//! 4. saves folder housekeeping
//! 5. shipped files: engine, assets, license, citation
//! 6. engine handshake
//!
//! Every collaborator that touches the outside world sits behind a trait so
//! the whole flow can run against fakes.

use std::path::PathBuf;

use super::engine::{EngineCheck, UciHandshake};
use super::error::InstallResult;
use super::integrity::verify_installation;
use super::log::SetupLog;
use super::platform::{check_platform, Platform};
use super::requirements::{
    ensure_requirements, load_requirements, CargoInstaller, PackageInstaller, PathProbe,
    ProbeResolver,
};
use super::saves::{tidy_saves, SavesReport};
use super::version::{check_version, HttpVersionSource, RemoteVersion, SemVer, VersionSource};

/// What a successful run found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub local_version: SemVer,
    pub remote_version: RemoteVersion,
    pub saves: SavesReport,
    pub engine_name: String,
}

pub struct InstallerFlow {
    pub root: PathBuf,
    pub platform: Platform,
    pub local_version: SemVer,
    pub version_source: Box<dyn VersionSource>,
    pub probe: Box<dyn ProbeResolver>,
    /// `None` reports missing packages without trying to install them
    pub installer: Option<Box<dyn PackageInstaller>>,
    pub engine: Box<dyn EngineCheck>,
}

impl InstallerFlow {
    /// Flow wired to the real network, `PATH`, `cargo` and engine process
    pub fn new(root: impl Into<PathBuf>, version_url: &str) -> Self {
        Self {
            root: root.into(),
            platform: Platform::detect(),
            local_version: SemVer::current(),
            version_source: Box::new(HttpVersionSource::new(version_url)),
            probe: Box::new(PathProbe),
            installer: Some(Box::new(CargoInstaller)),
            engine: Box::new(UciHandshake::default()),
        }
    }

    pub fn run(&self, log: &mut SetupLog) -> InstallResult<SetupReport> {
        log.info(format!("Checking installation at {}", self.root.display()));

        let remote_version = check_version(&self.local_version, self.version_source.as_ref(), log);

        check_platform(&self.platform, log)?;

        let requirements = load_requirements(&self.root, log)?;
        ensure_requirements(
            &requirements,
            self.probe.as_ref(),
            self.installer.as_deref(),
            log,
        )?;

        let saves = tidy_saves(&self.root, log)?;

        verify_installation(&self.root, &self.platform, log)?;

        let engine_path = self.root.join(self.platform.engine_path());
        let engine_name = self.engine.check(&engine_path, log)?;

        log.info("Installation is healthy");
        Ok(SetupReport {
            local_version: self.local_version.clone(),
            remote_version,
            saves,
            engine_name,
        })
    }
}
