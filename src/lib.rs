//! # seashail-mcp
//!
//! Bootstrap launcher for the seashail MCP server.
//!
//! The launcher finds an installed `seashail` binary, installs it with the
//! hosted installer script when it is missing, defaults
//! `SEASHAIL_AUTO_UPGRADE=1`, and replaces itself with `seashail mcp <args>`.
//!
//! ## Features
//!
//! - [`resolve`] locates the binary (override, search path, well-known dirs)
//! - [`install`] runs the platform's installer script once
//! - [`prepare`] sequences resolve → install → resolve into a [`LaunchPlan`]
//! - [`LaunchPlan::exec`] hands the process over to seashail
//!
//! ## Example
//!
//! ```rust,no_run
//! use seashail_mcp::{prepare, LaunchOptions, ScriptInstaller};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let options = LaunchOptions::from_env();
//!     let passthrough = std::env::args_os().skip(1).collect();
//!     match prepare(&options, passthrough, &ScriptInstaller).await {
//!         Ok(plan) => eprintln!("{}", plan.exec()),
//!         Err(e) => eprintln!("{}: {}", e, e.fix_suggestion()),
//!     }
//! }
//! ```

mod detect;
mod detection;
mod install;
mod launch;
mod options;
mod platform;
mod resolution;

pub use detect::resolve;
pub use install::{
    install, resolve_powershell, run_install_command, InstallCommand, InstallError,
    InstallOptions, InstallProgress,
};
pub use launch::{prepare, Installer, LaunchError, LaunchPlan, ScriptInstaller, SERVE_SUBCOMMAND};
pub use options::{
    LaunchOptions, AUTO_UPGRADE_DEFAULT, AUTO_UPGRADE_ENV, BIN_ENV, INSTALL_TIMEOUT_ENV,
    INSTALL_URL_ENV, LOG_ENV,
};
pub use platform::{Platform, BINARY_NAME};
pub use resolution::{Resolution, ResolutionSource};
