//! Error types for installation operations.
//!
//! Each error variant includes an actionable fix suggestion to help users
//! recover, since the launcher has no retry of its own.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while installing seashail.
///
/// # Example
///
/// ```rust
/// use seashail_mcp::InstallError;
///
/// fn handle_error(error: InstallError) {
///     eprintln!("Installation failed: {}", error);
///     eprintln!("To fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
    /// An interpreter needed to run the installer is not on the search path.
    #[error("missing dependency: {name}")]
    MissingDependency {
        /// What is missing (e.g., "powershell (or pwsh)").
        name: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The installer process could not be started.
    #[error("failed to start installer `{}`: {source}", program.display())]
    Spawn {
        /// Program that failed to start.
        program: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The installer ran and exited unsuccessfully.
    #[error("{message}")]
    InstallerFailed {
        /// Description of the failure, including the exit code.
        message: String,
        /// Exit code from the installer, `None` if killed by a signal.
        exit_code: Option<i32>,
        /// Signal that terminated the installer (Unix only).
        signal: Option<i32>,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The installer exceeded `SEASHAIL_INSTALL_TIMEOUT_SECONDS`.
    #[error("installer timed out after {duration:?}")]
    Timeout {
        /// How long the installer was allowed to run.
        duration: Duration,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },
}

impl InstallError {
    /// Build an [`InstallError::InstallerFailed`] from how the installer ended.
    pub(crate) fn installer_failed(exit_code: Option<i32>, signal: Option<i32>) -> Self {
        let message = match (exit_code, signal) {
            (Some(code), _) => format!("installer failed with exit code {code}"),
            (None, Some(signal)) => format!("installer terminated by signal {signal}"),
            (None, None) => "installer failed without an exit code".to_string(),
        };
        Self::InstallerFailed {
            message,
            exit_code,
            signal,
            fix: "See the installer output above, or install seashail manually and set SEASHAIL_BIN"
                .to_string(),
        }
    }

    /// Get an actionable suggestion for fixing this error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seashail_mcp::InstallError;
    ///
    /// let error = InstallError::MissingDependency {
    ///     name: "powershell (or pwsh)".to_string(),
    ///     fix: "Install PowerShell".to_string(),
    /// };
    /// assert_eq!(error.fix_suggestion(), "Install PowerShell");
    /// ```
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::MissingDependency { fix, .. } => fix,
            Self::Spawn { fix, .. } => fix,
            Self::InstallerFailed { fix, .. } => fix,
            Self::Timeout { fix, .. } => fix,
        }
    }

    /// Exit code of the installer, when it ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::InstallerFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}
