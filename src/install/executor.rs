//! Installation execution.
//!
//! This module provides the [`install`] function that runs the platform's
//! installer script, and [`run_install_command`] which executes any
//! [`InstallCommand`] with inherited standard streams.

use crate::install::{InstallCommand, InstallError, InstallOptions, InstallProgress};
use crate::{LaunchOptions, Platform};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tokio::time::timeout;

/// Install seashail by running the hosted installer script.
///
/// This function:
/// 1. Reports `Started`
/// 2. On Windows, resolves a PowerShell interpreter (fails before spawning
///    anything if there is none)
/// 3. Runs the installer, inheriting stdin, stdout and stderr
/// 4. Reports `Completed` on a zero exit status
///
/// There is no retry and no verification of the downloaded script; the
/// caller re-resolves the binary afterwards.
///
/// # Example
///
/// ```rust,no_run
/// use seashail_mcp::{install, LaunchOptions};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let options = LaunchOptions::from_env();
///     match install(&options, |p| eprintln!("{}", p.description())).await {
///         Ok(()) => eprintln!("installed"),
///         Err(e) => eprintln!("Failed: {}. Fix: {}", e, e.fix_suggestion()),
///     }
/// }
/// ```
pub async fn install<F>(options: &LaunchOptions, on_progress: F) -> Result<(), InstallError>
where
    F: Fn(InstallProgress),
{
    on_progress(InstallProgress::Started {
        platform: options.platform,
    });

    if options.platform == Platform::Windows {
        on_progress(InstallProgress::ResolvingInterpreter);
    }
    let command = options
        .platform
        .install_command(options.install_url(), options.search_path.as_deref(), &options.cwd)?
        .with_env(options.child_env());

    on_progress(InstallProgress::Installing {
        raw_command: command.raw_command.clone(),
    });

    let install_options = InstallOptions {
        timeout: options.install_timeout,
    };
    run_install_command(&command, &install_options).await?;

    on_progress(InstallProgress::Completed);
    Ok(())
}

/// Spawn `command` and wait for it to exit.
///
/// Standard streams are inherited so installer output reaches the terminal.
/// A non-zero exit becomes [`InstallError::InstallerFailed`] carrying the
/// exit code, or the signal number when the installer was killed.
///
/// When `options.timeout` elapses only the direct child is killed; anything
/// it spawned (the `curl | sh` pipeline) may keep running.
pub async fn run_install_command(
    command: &InstallCommand,
    options: &InstallOptions,
) -> Result<(), InstallError> {
    let mut child = Command::new(&command.program);
    child
        .args(&command.args)
        .envs(command.env_vars.iter().cloned())
        .kill_on_drop(true)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    tracing::info!(
        program = %command.program.display(),
        command = %command.raw_command,
        "running installer"
    );

    let status = match options.timeout {
        Some(limit) => match timeout(limit, child.status()).await {
            Ok(status) => status,
            Err(_) => {
                return Err(InstallError::Timeout {
                    duration: limit,
                    fix: format!(
                        "Installer did not finish within {:?}. Parts of it may still be running; wait for them or kill them, then check your network or raise SEASHAIL_INSTALL_TIMEOUT_SECONDS.",
                        limit
                    ),
                });
            }
        },
        None => child.status().await,
    };

    let status = status.map_err(|source| InstallError::Spawn {
        program: command.program.clone(),
        fix: format!(
            "Make sure `{}` is installed and on PATH",
            command.program.display()
        ),
        source,
    })?;

    if !status.success() {
        let signal = exit_signal(&status);
        tracing::warn!(exit_code = ?status.code(), signal = ?signal, "installer exited unsuccessfully");
        return Err(InstallError::installer_failed(status.code(), signal));
    }

    Ok(())
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn shell(script: &str) -> InstallCommand {
        InstallCommand {
            program: PathBuf::from("sh"),
            args: vec!["-c".to_string(), script.to_string()],
            env_vars: vec![],
            raw_command: script.to_string(),
        }
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "current_thread")]
    async fn test_success() {
        let result = run_install_command(&shell("exit 0"), &InstallOptions::default()).await;
        assert!(result.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "current_thread")]
    async fn test_nonzero_exit_reports_code() {
        let err = run_install_command(&shell("exit 17"), &InstallOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), Some(17));
        assert!(err.to_string().contains("17"));
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "current_thread")]
    async fn test_env_vars_reach_installer() {
        let cmd = shell(r#"test "$SEASHAIL_AUTO_UPGRADE" = "1""#)
            .with_env([("SEASHAIL_AUTO_UPGRADE".to_string(), "1".to_string())]);
        assert!(run_install_command(&cmd, &InstallOptions::default())
            .await
            .is_ok());
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "current_thread")]
    async fn test_timeout() {
        let err = run_install_command(
            &shell("sleep 5"),
            &InstallOptions {
                timeout: Some(Duration::from_millis(50)),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, InstallError::Timeout { .. }));
        assert!(err.fix_suggestion().contains("may still be running"));
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "current_thread")]
    async fn test_killed_by_signal_reports_signal() {
        let err = run_install_command(&shell("kill -KILL $$"), &InstallOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), None);
        assert!(matches!(
            err,
            InstallError::InstallerFailed { signal: Some(9), .. }
        ));
        assert_eq!(err.to_string(), "installer terminated by signal 9");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_spawn_failure() {
        let cmd = InstallCommand {
            program: PathBuf::from("/nonexistent/path/to/interpreter"),
            args: vec![],
            env_vars: vec![],
            raw_command: String::new(),
        };
        let err = run_install_command(&cmd, &InstallOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, InstallError::Spawn { .. }));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_windows_without_powershell_never_spawns() {
        let empty = tempfile::tempdir().unwrap();
        let mut options = LaunchOptions::from_lookup(Platform::Windows, |_| None);
        options.search_path = Some(empty.path().as_os_str().to_os_string());
        options.cwd = empty.path().to_path_buf();

        let stages = Arc::new(Mutex::new(Vec::new()));
        let stages_clone = stages.clone();
        let result = install(&options, move |progress| {
            stages_clone.lock().unwrap().push(progress);
        })
        .await;

        assert!(matches!(result, Err(InstallError::MissingDependency { .. })));
        let stages = stages.lock().unwrap();
        assert_eq!(
            *stages,
            vec![
                InstallProgress::Started {
                    platform: Platform::Windows
                },
                InstallProgress::ResolvingInterpreter,
            ]
        );
    }
}
