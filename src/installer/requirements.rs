//! Runtime requirements
//!
//! Each requirement pairs a package with the probe that tells whether it is
//! already present. Missing packages are handed to a [`PackageInstaller`];
//! every one is attempted and the failures reported together.
//!
//! The list lives in `<root>/requirements.txt`, one package per line:
//!
//! ```text
//! # comment
//! pgn-lint
//! ripgrep = rg
//! ```
//!
//! A bare name is probed as an executable of the same name; `package = exe`
//! names the executable explicitly.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::error::{InstallError, InstallResult};
use super::log::SetupLog;

/// How to tell that a requirement is satisfied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// An executable with this name is on `PATH`
    Executable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub package: String,
    pub probe: Probe,
}

impl Requirement {
    pub fn executable(package: impl Into<String>, executable: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            probe: Probe::Executable(executable.into()),
        }
    }
}

pub const REQUIREMENTS_FILE: &str = "requirements.txt";

pub fn parse_requirements(text: &str) -> Vec<Requirement> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('=') {
            Some((package, exe)) => Requirement::executable(package.trim(), exe.trim()),
            None => Requirement::executable(line, line),
        })
        .collect()
}

/// Reads `<root>/requirements.txt`; a missing file means no requirements
pub fn load_requirements(root: &Path, log: &mut SetupLog) -> io::Result<Vec<Requirement>> {
    let path = root.join(REQUIREMENTS_FILE);
    match fs::read_to_string(&path) {
        Ok(text) => Ok(parse_requirements(&text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log.debug(format!("No {} at {}", REQUIREMENTS_FILE, path.display()));
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

pub trait ProbeResolver {
    fn is_satisfied(&self, probe: &Probe) -> bool;
}

/// Searches the directories listed in `PATH`
pub struct PathProbe;

impl ProbeResolver for PathProbe {
    fn is_satisfied(&self, probe: &Probe) -> bool {
        match probe {
            Probe::Executable(name) => find_executable(name).is_some(),
        }
    }
}

pub fn find_executable(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths).find_map(|dir| executable_in(&dir, name))
}

fn executable_in(dir: &Path, name: &str) -> Option<PathBuf> {
    let candidate = dir.join(name);
    if candidate.is_file() {
        return Some(candidate);
    }
    if cfg!(windows) {
        let exe = dir.join(format!("{name}.exe"));
        if exe.is_file() {
            return Some(exe);
        }
    }
    None
}

pub trait PackageInstaller {
    /// Installs `package`, returning a short reason on failure
    fn install(&self, package: &str) -> Result<(), String>;
}

/// Installs through `cargo install`, output suppressed
pub struct CargoInstaller;

impl PackageInstaller for CargoInstaller {
    fn install(&self, package: &str) -> Result<(), String> {
        let status = Command::new("cargo")
            .args(["install", "--quiet", package])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| format!("could not run cargo: {e}"))?;
        if status.success() {
            Ok(())
        } else {
            Err(format!("cargo install exited with {status}"))
        }
    }
}

/// Probes every requirement and tries to install the missing ones
///
/// With no installer the missing packages are reported straight away.
pub fn ensure_requirements(
    requirements: &[Requirement],
    probe: &dyn ProbeResolver,
    installer: Option<&dyn PackageInstaller>,
    log: &mut SetupLog,
) -> InstallResult<()> {
    log.info(format!("Checking {} requirement(s)", requirements.len()));
    let missing: Vec<&Requirement> = requirements
        .iter()
        .filter(|req| {
            let present = probe.is_satisfied(&req.probe);
            log.debug(format!(
                "{}: {}",
                req.package,
                if present { "present" } else { "missing" }
            ));
            !present
        })
        .collect();

    if missing.is_empty() {
        log.info("All requirements satisfied");
        return Ok(());
    }

    let mut failed = Vec::new();
    for req in missing {
        let Some(installer) = installer else {
            log.error(format!("{} is missing and installs are disabled", req.package));
            failed.push(req.package.clone());
            continue;
        };
        log.info(format!("Installing {}", req.package));
        match installer.install(&req.package) {
            Ok(()) if probe.is_satisfied(&req.probe) => {
                log.info(format!("Installed {}", req.package));
            }
            Ok(()) => {
                log.error(format!("{} installed but still not found", req.package));
                failed.push(req.package.clone());
            }
            Err(reason) => {
                log.error(format!("Failed to install {}: {}", req.package, reason));
                failed.push(req.package.clone());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(InstallError::Dependency { missing: failed })
    }
}
