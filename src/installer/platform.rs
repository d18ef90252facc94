//! Operating system check
//!
//! Only Windows 10 or later is supported; the major version is read from the
//! banner printed by `cmd /C ver`. Every other system fails the check.

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use super::error::{InstallError, InstallResult};
use super::log::SetupLog;

pub const MIN_WINDOWS_MAJOR: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Major version is `None` when `ver` could not be run or parsed
    Windows { major: Option<u32> },
    Linux,
    MacOs,
    Other(String),
}

impl Platform {
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "windows" => Platform::Windows {
                major: windows_major_version(),
            },
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Engine binary location relative to the install root
    pub fn engine_path(&self) -> PathBuf {
        match self {
            Platform::Windows { .. } => PathBuf::from("engine").join("stockfish-windows-x86-64-avx2.exe"),
            _ => PathBuf::from("engine").join("stockfish"),
        }
    }
}

fn windows_major_version() -> Option<u32> {
    let output = Command::new("cmd").args(["/C", "ver"]).output().ok()?;
    parse_windows_ver(&String::from_utf8_lossy(&output.stdout))
}

/// Major version from `Microsoft Windows [Version 10.0.19045.4291]`
pub fn parse_windows_ver(banner: &str) -> Option<u32> {
    let start = banner.find("Version ")? + "Version ".len();
    let digits: String = banner[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

pub fn check_platform(platform: &Platform, log: &mut SetupLog) -> InstallResult<()> {
    match platform {
        Platform::Windows { major: Some(major) } if *major >= MIN_WINDOWS_MAJOR => {
            log.info(format!("Windows {major} detected"));
            Ok(())
        }
        Platform::Windows { major } => Err(InstallError::Platform {
            detail: match major {
                Some(major) => format!("Windows {major} is older than Windows {MIN_WINDOWS_MAJOR}"),
                None => "could not determine the Windows version".to_string(),
            },
        }),
        other => Err(InstallError::Platform {
            detail: format!("Windows {MIN_WINDOWS_MAJOR} or later is required, found {other}"),
        }),
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows { major: Some(major) } => write!(f, "Windows {major}"),
            Platform::Windows { major: None } => write!(f, "Windows"),
            Platform::Linux => write!(f, "Linux"),
            Platform::MacOs => write!(f, "macOS"),
            Platform::Other(name) => write!(f, "'{name}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_windows_ver() {
        assert_eq!(parse_windows_ver("\r\nMicrosoft Windows [Version 10.0.19045.4291]\r\n"), Some(10));
        assert_eq!(parse_windows_ver("Microsoft Windows [Version 6.1.7601]"), Some(6));
        assert_eq!(parse_windows_ver("garbage"), None);
    }

    #[test]
    fn test_platform_rules() {
        let mut log = SetupLog::new();
        assert!(check_platform(&Platform::Windows { major: Some(10) }, &mut log).is_ok());
        assert!(check_platform(&Platform::Windows { major: Some(11) }, &mut log).is_ok());
        assert!(check_platform(&Platform::Linux, &mut log).is_err());
        assert!(check_platform(&Platform::MacOs, &mut log).is_err());
        assert!(check_platform(&Platform::Windows { major: Some(6) }, &mut log).is_err());
        assert!(check_platform(&Platform::Windows { major: None }, &mut log).is_err());
        assert!(check_platform(&Platform::Other("freebsd".into()), &mut log).is_err());
    }

    #[test]
    fn test_non_windows_error_names_the_system() {
        let mut log = SetupLog::new();
        match check_platform(&Platform::Linux, &mut log) {
            Err(InstallError::Platform { detail }) => {
                assert_eq!(detail, "Windows 10 or later is required, found Linux")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_engine_path_per_platform() {
        assert!(Platform::Windows { major: Some(10) }
            .engine_path()
            .ends_with("stockfish-windows-x86-64-avx2.exe"));
        assert!(Platform::Linux.engine_path().ends_with("engine/stockfish"));
    }
}
