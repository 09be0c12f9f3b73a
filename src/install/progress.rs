//! Progress reporting types for installation operations.
//!
//! The [`InstallProgress`] enum represents discrete stages of installation
//! that can be reported via a callback.

use crate::Platform;
use std::time::Duration;

/// Progress stages during installation.
///
/// # Example
///
/// ```rust
/// use seashail_mcp::InstallProgress;
///
/// fn on_progress(progress: InstallProgress) {
///     match &progress {
///         InstallProgress::Started { platform } => {
///             eprintln!("Installing seashail for {}", platform);
///         }
///         InstallProgress::ResolvingInterpreter => eprintln!("Looking for PowerShell..."),
///         InstallProgress::Installing { raw_command } => eprintln!("Running: {}", raw_command),
///         InstallProgress::Completed => eprintln!("Installer finished"),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallProgress {
    /// Installation has started.
    Started {
        /// Platform whose installer transport is used.
        platform: Platform,
    },

    /// Looking up the PowerShell interpreter (Windows only).
    ResolvingInterpreter,

    /// The installer subprocess is running.
    Installing {
        /// Pipeline handed to the interpreter.
        raw_command: String,
    },

    /// The installer exited successfully.
    Completed,
}

impl InstallProgress {
    /// Get a human-readable description of the current progress stage.
    ///
    /// ```rust
    /// use seashail_mcp::InstallProgress;
    ///
    /// assert_eq!(InstallProgress::Completed.description(), "Installer finished");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::Started { .. } => "Starting installation",
            Self::ResolvingInterpreter => "Resolving PowerShell interpreter",
            Self::Installing { .. } => "Running installer",
            Self::Completed => "Installer finished",
        }
    }

    /// Check if this progress stage indicates completion.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Options for controlling installer execution.
///
/// # Example
///
/// ```rust
/// use seashail_mcp::InstallOptions;
/// use std::time::Duration;
///
/// // Default: wait for the installer as long as it takes
/// assert_eq!(InstallOptions::default().timeout, None);
///
/// let bounded = InstallOptions { timeout: Some(Duration::from_secs(600)) };
/// assert!(bounded.timeout.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Maximum time the installer may run. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}
