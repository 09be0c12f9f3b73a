//! Installation of the seashail binary.
//!
//! When resolution finds nothing, the launcher runs the hosted installer
//! script once:
//!
//! - POSIX: `sh -c "curl -fsSL <url> | sh"`
//! - Windows: `pwsh -NoProfile -ExecutionPolicy Bypass -Command "irm <url> | iex"`
//!
//! `<url>` defaults per platform and can be replaced with
//! `SEASHAIL_INSTALL_URL`.

mod errors;
mod executor;
mod info;
mod prereq;
mod progress;
mod types;

pub use errors::InstallError;
pub use executor::{install, run_install_command};
pub(crate) use info::{posix_install_command, windows_install_command};
pub use prereq::resolve_powershell;
pub use progress::{InstallOptions, InstallProgress};
pub use types::InstallCommand;
