//! Version check
//!
//! The local version is the crate version baked in at build time. The remote
//! version is read from a published manifest: the first line starting with
//! `version` and carrying a quoted value, e.g. `version = "1.2.3"`. Any
//! failure to fetch or parse it yields [`RemoteVersion::Unknown`], which only
//! costs the user a warning.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use super::log::SetupLog;

/// Line prefix carrying the version in the remote manifest
pub const VERSION_MARKER: &str = "version";

pub const DEFAULT_VERSION_URL: &str =
    "https://raw.githubusercontent.com/chessdesk/chessdesk/main/Cargo.toml";

/// Upper bound on the version request
pub const VERSION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("no 'version' line in manifest")]
    MissingMarker,

    #[error("'{0}' is not a semantic version")]
    Invalid(String),
}

/// `major.minor.patch` with an optional pre-release tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<String>,
}

impl SemVer {
    /// Version of this build
    pub fn current() -> Self {
        env!("CARGO_PKG_VERSION").parse().unwrap_or(SemVer {
            major: 0,
            minor: 0,
            patch: 0,
            pre: None,
        })
    }
}

impl FromStr for SemVer {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let core = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let core = core.split('+').next().unwrap_or(core);
        let (numbers, pre) = match core.split_once('-') {
            Some((numbers, pre)) => (numbers, Some(pre.to_string())),
            None => (core, None),
        };

        let mut parts = [0u64; 3];
        let mut count = 0;
        for piece in numbers.split('.') {
            if count == 3 {
                return Err(VersionError::Invalid(s.to_string()));
            }
            parts[count] = piece
                .parse()
                .map_err(|_| VersionError::Invalid(s.to_string()))?;
            count += 1;
        }
        Ok(SemVer {
            major: parts[0],
            minor: parts[1],
            patch: parts[2],
            pre,
        })
    }
}

impl Ord for SemVer {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => compare_pre_release(a, b),
            })
    }
}

/// Dot-separated identifiers left to right: numeric ones compare as numbers
/// and sort below alphanumeric ones; a shorter tag with an equal prefix is
/// lower
fn compare_pre_release(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match (x.parse::<u64>(), y.parse::<u64>()) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                (Ok(_), Err(_)) => Ordering::Less,
                (Err(_), Ok(_)) => Ordering::Greater,
                (Err(_), Err(_)) => x.cmp(y),
            },
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

impl PartialOrd for SemVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{pre}")?;
        }
        Ok(())
    }
}

/// Pulls the quoted value out of the first `version = "..."` line
pub fn parse_version_line(manifest: &str) -> Option<&str> {
    manifest.lines().find_map(|line| {
        let rest = line.trim_start().strip_prefix(VERSION_MARKER)?;
        let value = rest.trim_start().strip_prefix('=')?;
        let value = value.split('#').next()?.trim();
        let value = value.strip_prefix('"')?.strip_suffix('"')?;
        Some(value)
    })
}

/// Where the latest published version comes from
pub trait VersionSource {
    /// Raw manifest text
    fn fetch_manifest(&self) -> Result<String, VersionError>;
}

/// Fetches the manifest over HTTPS with a bounded timeout
pub struct HttpVersionSource {
    pub url: String,
    pub timeout: Duration,
}

impl HttpVersionSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: VERSION_TIMEOUT,
        }
    }
}

impl VersionSource for HttpVersionSource {
    fn fetch_manifest(&self) -> Result<String, VersionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| VersionError::Network(e.to_string()))?;
        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| VersionError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(VersionError::Status(response.status().as_u16()));
        }
        response
            .text()
            .map_err(|e| VersionError::Network(e.to_string()))
    }
}

/// Never reaches the network
pub struct OfflineVersionSource;

impl VersionSource for OfflineVersionSource {
    fn fetch_manifest(&self) -> Result<String, VersionError> {
        Err(VersionError::Network("offline mode".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteVersion {
    Known(SemVer),
    Unknown,
}

pub fn fetch_remote_version(source: &dyn VersionSource) -> Result<SemVer, VersionError> {
    let manifest = source.fetch_manifest()?;
    parse_version_line(&manifest)
        .ok_or(VersionError::MissingMarker)?
        .parse()
}

/// Compares the local build against the published version and logs the outcome
pub fn check_version(local: &SemVer, source: &dyn VersionSource, log: &mut SetupLog) -> RemoteVersion {
    log.info(format!("Local version: {local}"));
    let remote = match fetch_remote_version(source) {
        Ok(remote) => remote,
        Err(e) => {
            log.warn(format!("Could not determine latest version: {e}"));
            return RemoteVersion::Unknown;
        }
    };

    match remote.cmp(local) {
        Ordering::Greater => log.warn(format!(
            "Update available: {remote} (installed {local})"
        )),
        Ordering::Equal => log.info("Up to date"),
        Ordering::Less => log.info(format!(
            "Installed build {local} is newer than published {remote}"
        )),
    }
    RemoteVersion::Known(remote)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl VersionSource for Fixed {
        fn fetch_manifest(&self) -> Result<String, VersionError> {
            Ok(self.0.to_string())
        }
    }

    fn v(s: &str) -> SemVer {
        s.parse().unwrap()
    }

    #[test]
    fn test_semver_ordering_is_numeric() {
        assert!(v("0.10.0") > v("0.9.9"));
        assert!(v("1.0.0") > v("1.0.0-rc.1"));
        assert!(v("1.0.0-rc.10") > v("1.0.0-rc.9"));
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
        assert!(v("1.0.0-alpha.beta") > v("1.0.0-alpha.1"));
        assert!(v("1.0.0-beta") > v("1.0.0-alpha.7"));
        assert_eq!(v("v1.2"), v("1.2.0"));
        assert!(v("1.2.3+build.7") == v("1.2.3"));
        assert!("1.2.x".parse::<SemVer>().is_err());
        assert!("1.2.3.4".parse::<SemVer>().is_err());
    }

    #[test]
    fn test_parse_version_line() {
        let manifest = "[package]\nname = \"chessdesk\"\nrust-version = \"1.85\"\nversion = \"1.4.2\" # bump\n";
        assert_eq!(parse_version_line(manifest), Some("1.4.2"));
        assert_eq!(parse_version_line("versions = 3\n"), None);
        assert_eq!(parse_version_line("name = \"x\"\n"), None);
    }

    #[test]
    fn test_newer_remote_warns() {
        let mut log = SetupLog::new();
        let remote = check_version(&v("0.1.0"), &Fixed("version = \"0.2.0\""), &mut log);
        assert_eq!(remote, RemoteVersion::Known(v("0.2.0")));
        assert_eq!(log.warnings(), 1);
    }

    #[test]
    fn test_newer_release_candidate_warns() {
        let mut log = SetupLog::new();
        check_version(&v("1.0.0-rc.9"), &Fixed("version = \"1.0.0-rc.10\""), &mut log);
        assert_eq!(log.warnings(), 1);
    }

    #[test]
    fn test_same_or_older_remote_is_quiet() {
        let mut log = SetupLog::new();
        check_version(&v("0.2.0"), &Fixed("version = \"0.2.0\""), &mut log);
        check_version(&v("0.3.0"), &Fixed("version = \"0.2.0\""), &mut log);
        assert_eq!(log.warnings(), 0);
    }

    #[test]
    fn test_failures_become_unknown() {
        let mut log = SetupLog::new();
        assert_eq!(
            check_version(&v("0.1.0"), &OfflineVersionSource, &mut log),
            RemoteVersion::Unknown
        );
        assert_eq!(
            check_version(&v("0.1.0"), &Fixed("no marker here"), &mut log),
            RemoteVersion::Unknown
        );
        assert_eq!(log.warnings(), 2);
        assert_eq!(log.errors(), 0);
    }
}
