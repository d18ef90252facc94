//! Error types for the setup tool
//!
//! Every variant is fatal once it reaches [`crate::installer::InstallerFlow`];
//! recoverable problems (network, missing saves folder) are logged as
//! warnings by the step that hit them and never surface here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    /// Requirements still missing after every install attempt
    #[error("Failed to install {} requirement(s): {}", missing.len(), missing.join(", "))]
    Dependency { missing: Vec<String> },

    /// A file or folder the application ships with is missing
    #[error("{what} not found at '{}'. {remedy}", path.display())]
    Integrity {
        what: &'static str,
        path: PathBuf,
        remedy: &'static str,
    },

    /// The operating system is not supported
    #[error("Unsupported platform: {detail}")]
    Platform { detail: String },

    /// The engine binary did not complete the UCI handshake
    #[error("Engine at '{}' failed to start: {reason}", path.display())]
    Engine { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InstallError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type InstallResult<T> = Result<T, InstallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_message_names_every_package() {
        let err = InstallError::Dependency {
            missing: vec!["alpha".into(), "beta".into()],
        };
        assert_eq!(err.to_string(), "Failed to install 2 requirement(s): alpha, beta");
        assert_eq!(err.exit_code(), 1);
    }
}
