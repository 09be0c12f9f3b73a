//! Platform family the launcher runs on.

use crate::install::{posix_install_command, windows_install_command, InstallCommand};
use crate::InstallError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Base name of the wrapped executable.
pub const BINARY_NAME: &str = "seashail";

/// Platform family, selected once at startup.
///
/// Everything that differs between POSIX systems and Windows (executable
/// suffix, installer URL, installer transport) hangs off this enum so the
/// launch flow itself never branches on `cfg!(windows)`.
///
/// # Example
///
/// ```rust
/// use seashail_mcp::Platform;
///
/// let platform = Platform::current();
/// println!("{}: {}", platform, platform.executable_file_name());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    /// Linux, macOS and other Unix-likes. Installs through `curl | sh`.
    Posix,
    /// Windows. Installs through PowerShell `irm | iex`.
    Windows,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// File name of the binary inside well-known install directories.
    ///
    /// ```rust
    /// use seashail_mcp::Platform;
    ///
    /// assert_eq!(Platform::Posix.executable_file_name(), "seashail");
    /// assert_eq!(Platform::Windows.executable_file_name(), "seashail.exe");
    /// ```
    pub fn executable_file_name(&self) -> String {
        match self {
            Self::Posix => BINARY_NAME.to_string(),
            Self::Windows => format!("{BINARY_NAME}.exe"),
        }
    }

    /// Installer script URL used when `SEASHAIL_INSTALL_URL` is not set.
    pub fn default_install_url(&self) -> &'static str {
        match self {
            Self::Posix => "https://seashail.com/install",
            Self::Windows => "https://seashail.com/install.ps1",
        }
    }

    /// Search path used when `PATH` is not set at all.
    pub fn default_search_path(&self) -> &'static str {
        match self {
            Self::Posix => "/bin:/usr/bin",
            Self::Windows => r".;C:\bin",
        }
    }

    /// Well-known install locations under `home`, in lookup order.
    ///
    /// The hosted installer drops the binary into `~/.local/bin`; a
    /// `cargo install` puts it into `~/.cargo/bin`.
    pub fn well_known_candidates(&self, home: &Path) -> [PathBuf; 2] {
        let file_name = self.executable_file_name();
        [
            home.join(".local").join("bin").join(&file_name),
            home.join(".cargo").join("bin").join(&file_name),
        ]
    }

    /// Build the installer command for this platform.
    ///
    /// On Windows this needs a PowerShell interpreter on `search_path` and
    /// fails with [`InstallError::MissingDependency`] when there is none.
    pub fn install_command(
        &self,
        url: &str,
        search_path: Option<&OsStr>,
        cwd: &Path,
    ) -> Result<InstallCommand, InstallError> {
        match self {
            Self::Posix => Ok(posix_install_command(url)),
            Self::Windows => {
                let powershell = crate::install::resolve_powershell(search_path, cwd)?;
                Ok(windows_install_command(powershell, url))
            }
        }
    }
}
