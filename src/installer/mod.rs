//! Installer module - verifies and repairs an installation
//!
//! Backs the `chessdesk-setup` binary. [`InstallerFlow`] drives the steps;
//! each step lives in its own module and reports through a shared
//! [`SetupLog`].
//!
//! # Exit Status
//!
//! A run that returns `Ok` exits with 0. Any [`InstallError`] is fatal and
//! exits with [`InstallError::exit_code`].

pub mod engine;
pub mod error;
pub mod flow;
pub mod integrity;
pub mod log;
pub mod platform;
pub mod requirements;
pub mod saves;
pub mod version;

pub use engine::{EngineCheck, UciHandshake};
pub use error::{InstallError, InstallResult};
pub use flow::{InstallerFlow, SetupReport};
pub use log::SetupLog;
pub use platform::Platform;
pub use requirements::{PackageInstaller, Probe, ProbeResolver, Requirement};
pub use version::{RemoteVersion, SemVer, VersionError, VersionSource, DEFAULT_VERSION_URL};
