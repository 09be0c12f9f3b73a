//! Resolve, install if needed, and hand the process over to seashail.

use crate::install::{install, InstallError, InstallProgress};
use crate::platform::BINARY_NAME;
use crate::{resolve, LaunchOptions};
use std::ffi::OsString;
use std::future::Future;
use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

/// Subcommand that starts seashail's MCP server over stdio.
pub const SERVE_SUBCOMMAND: &str = "mcp";

/// Errors that end a launch.
///
/// None of these are retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LaunchError {
    /// The installer could not run or exited unsuccessfully.
    #[error(transparent)]
    Install(#[from] InstallError),

    /// The installer succeeded but the binary still cannot be found.
    #[error("failed to find the `{binary}` binary after install")]
    NotFoundAfterInstall {
        /// Name of the binary that was searched for.
        binary: &'static str,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// Replacing the process with the binary failed.
    #[error("failed to launch {}: {source}", program.display())]
    Exec {
        /// Binary that could not be started.
        program: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },
}

impl LaunchError {
    /// Get an actionable suggestion for fixing this error.
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::Install(e) => e.fix_suggestion(),
            Self::NotFoundAfterInstall { fix, .. } => fix,
            Self::Exec { fix, .. } => fix,
        }
    }
}

/// Something that can install the binary.
///
/// [`ScriptInstaller`] is the real implementation; [`prepare`] only needs
/// this seam.
pub trait Installer {
    /// Run one installation attempt.
    fn install(&self, options: &LaunchOptions) -> impl Future<Output = Result<(), InstallError>>;
}

/// Installs via the hosted install script, logging progress stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptInstaller;

impl Installer for ScriptInstaller {
    async fn install(&self, options: &LaunchOptions) -> Result<(), InstallError> {
        install(options, log_progress).await
    }
}

fn log_progress(progress: InstallProgress) {
    match &progress {
        InstallProgress::Installing { raw_command } => {
            tracing::info!(command = %raw_command, "{}", progress.description());
        }
        _ if progress.is_complete() => {
            tracing::info!("{}, looking for {BINARY_NAME} again", progress.description());
        }
        _ => tracing::info!("{}", progress.description()),
    }
}

/// What to run once resolution succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Resolved seashail binary.
    pub program: PathBuf,

    /// `mcp` followed by the passthrough arguments, in order.
    pub args: Vec<OsString>,

    /// Variables added on top of the inherited environment.
    pub env_vars: Vec<(String, String)>,
}

/// Resolve the binary, installing it once if it is missing.
///
/// Runs `resolve → install → resolve`. A second miss is
/// [`LaunchError::NotFoundAfterInstall`]; there is never a second install.
/// `passthrough` is forwarded verbatim after [`SERVE_SUBCOMMAND`], without
/// stripping a leading `--` or anything else.
///
/// # Example
///
/// ```rust,no_run
/// use seashail_mcp::{prepare, LaunchOptions, ScriptInstaller};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let options = LaunchOptions::from_env();
///     let args = vec!["--network".into(), "testnet".into()];
///     match prepare(&options, args, &ScriptInstaller).await {
///         Ok(plan) => {
///             let err = plan.exec();
///             eprintln!("{err}");
///         }
///         Err(e) => eprintln!("{}: {}", e, e.fix_suggestion()),
///     }
/// }
/// ```
pub async fn prepare<I: Installer>(
    options: &LaunchOptions,
    passthrough: Vec<OsString>,
    installer: &I,
) -> Result<LaunchPlan, LaunchError> {
    let resolution = match resolve(options) {
        Some(found) => found,
        None => {
            tracing::info!("{BINARY_NAME} not found, running installer");
            installer.install(options).await?;
            resolve(options).ok_or_else(|| LaunchError::NotFoundAfterInstall {
                binary: BINARY_NAME,
                fix: "Open a new terminal so PATH changes apply, or set SEASHAIL_BIN to the installed binary"
                    .to_string(),
            })?
        }
    };

    tracing::debug!(
        path = %resolution.path().display(),
        source = %resolution.source,
        "resolved {BINARY_NAME}"
    );

    let mut args = Vec::with_capacity(passthrough.len() + 1);
    args.push(OsString::from(SERVE_SUBCOMMAND));
    args.extend(passthrough);

    Ok(LaunchPlan {
        program: resolution.into_path(),
        args,
        env_vars: options.child_env(),
    })
}

impl LaunchPlan {
    /// Build the command that runs this plan.
    ///
    /// Standard streams and the environment are inherited; `env_vars` are
    /// layered on top.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .envs(self.env_vars.iter().map(|(k, v)| (k, v)));
        command
    }

    /// Replace the current process with seashail.
    ///
    /// On Unix this calls `exec` and only returns on failure. Elsewhere the
    /// binary is run as a child and this process exits with its exit code.
    pub fn exec(self) -> LaunchError {
        tracing::debug!(program = %self.program.display(), "launching");
        let source = self.exec_inner();
        LaunchError::Exec {
            fix: format!(
                "Check that {} is a working seashail binary, or point SEASHAIL_BIN at one",
                self.program.display()
            ),
            program: self.program,
            source,
        }
    }

    #[cfg(unix)]
    fn exec_inner(&self) -> std::io::Error {
        use std::os::unix::process::CommandExt;
        self.command().exec()
    }

    #[cfg(not(unix))]
    fn exec_inner(&self) -> std::io::Error {
        match self.command().status() {
            Ok(status) => std::process::exit(status.code().unwrap_or(1)),
            Err(e) => e,
        }
    }
}
