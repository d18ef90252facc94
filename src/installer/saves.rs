//! Saves folder housekeeping
//!
//! The saves folder must hold only `*.pgn` game records. Anything else that
//! is a regular file is removed; subdirectories are left alone.

use std::fs;
use std::path::Path;

use crate::core::SAVES_DIR;

use super::error::InstallResult;
use super::log::SetupLog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SavesReport {
    pub games: usize,
    pub removed: usize,
    pub created: bool,
}

pub fn tidy_saves(root: &Path, log: &mut SetupLog) -> InstallResult<SavesReport> {
    let dir = root.join(SAVES_DIR);
    if !dir.is_dir() {
        log.warn(format!("Saves folder missing, creating {}", dir.display()));
        fs::create_dir_all(&dir)?;
        return Ok(SavesReport {
            created: true,
            ..Default::default()
        });
    }

    let mut report = SavesReport::default();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_pgn = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pgn"));
        if is_pgn {
            report.games += 1;
        } else {
            log.debug(format!("Removing stray file {}", path.display()));
            fs::remove_file(&path)?;
            report.removed += 1;
        }
    }
    log.info(format!(
        "{} saved game(s), {} stray file(s) removed",
        report.games, report.removed
    ));
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("chessdesk-saves-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_missing_folder_is_created_with_warning() {
        let root = temp_root();
        let mut log = SetupLog::new();
        let report = tidy_saves(&root, &mut log).unwrap();
        assert!(report.created);
        assert!(root.join(SAVES_DIR).is_dir());
        assert_eq!(log.warnings(), 1);
        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_only_pgn_files_survive() {
        let root = temp_root();
        let saves = root.join(SAVES_DIR);
        fs::create_dir_all(saves.join("nested")).unwrap();
        fs::write(saves.join("a.pgn"), "*").unwrap();
        fs::write(saves.join("b.PGN"), "*").unwrap();
        fs::write(saves.join("notes.txt"), "x").unwrap();
        fs::write(saves.join("game.pgn.bak"), "x").unwrap();

        let mut log = SetupLog::new();
        let report = tidy_saves(&root, &mut log).unwrap();
        assert_eq!(report.games, 2);
        assert_eq!(report.removed, 2);
        assert!(!saves.join("notes.txt").exists());
        assert!(saves.join("nested").is_dir());
        fs::remove_dir_all(root).ok();
    }
}
