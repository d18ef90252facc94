//! Installation integrity
//!
//! Checks, in order, that the files the application ships with are present.
//! The first missing one stops the run with a hint on how to fix it.

use std::path::Path;

use crate::assets::PIECES_SUBDIR;

use super::error::{InstallError, InstallResult};
use super::log::SetupLog;
use super::platform::Platform;

pub const ASSETS_DIR: &str = "assets";
pub const LICENSE_FILE: &str = "LICENSE.md";
pub const CITATION_FILE: &str = "CITATION.cff";

const REINSTALL: &str = "Reinstall the application to restore it.";

pub fn verify_installation(root: &Path, platform: &Platform, log: &mut SetupLog) -> InstallResult<()> {
    let engine = root.join(platform.engine_path());
    require(
        engine.is_file(),
        "Chess engine",
        &engine,
        "Download the engine build for this platform into the engine folder.",
    )?;
    log.info(format!("Engine found at {}", engine.display()));

    let pieces = root.join(ASSETS_DIR).join(PIECES_SUBDIR);
    require(pieces.is_dir(), "Piece assets", &pieces, REINSTALL)?;
    log.info("Assets found");

    let license = root.join(LICENSE_FILE);
    require(license.is_file(), "License file", &license, REINSTALL)?;

    let citation = root.join(CITATION_FILE);
    require(citation.is_file(), "Citation file", &citation, REINSTALL)?;
    log.info("License and citation found");
    Ok(())
}

fn require(present: bool, what: &'static str, path: &Path, remedy: &'static str) -> InstallResult<()> {
    if present {
        Ok(())
    } else {
        Err(InstallError::Integrity {
            what,
            path: path.to_path_buf(),
            remedy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_reports_first_missing_item() {
        let root = std::env::temp_dir().join(format!("chessdesk-int-{}", uuid::Uuid::new_v4()));
        let platform = Platform::Linux;
        fs::create_dir_all(root.join("engine")).unwrap();
        fs::write(root.join(platform.engine_path()), "").unwrap();
        fs::create_dir_all(root.join(ASSETS_DIR).join(PIECES_SUBDIR)).unwrap();
        fs::write(root.join(LICENSE_FILE), "").unwrap();

        let mut log = SetupLog::new();
        match verify_installation(&root, &platform, &mut log) {
            Err(InstallError::Integrity { what, .. }) => assert_eq!(what, "Citation file"),
            other => panic!("unexpected result: {other:?}"),
        }

        fs::write(root.join(CITATION_FILE), "").unwrap();
        assert!(verify_installation(&root, &platform, &mut log).is_ok());
        fs::remove_dir_all(root).ok();
    }
}
