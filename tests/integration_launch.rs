//! Integration tests for the resolve → install → resolve → launch flow.
//!
//! Every test builds its own sandbox (fake home and search path) so the
//! real machine state and process environment are never consulted.

#![cfg(unix)]

use seashail_mcp::{
    prepare, resolve, run_install_command, InstallCommand, InstallError, InstallOptions,
    Installer, LaunchError, LaunchOptions, Platform, ResolutionSource, AUTO_UPGRADE_ENV,
};
use std::cell::Cell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("home")).unwrap();
        fs::create_dir_all(root.path().join("path")).unwrap();
        Self { root }
    }

    fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    fn executable(&self, rel: &str) -> PathBuf {
        make_executable(&self.root.path().join(rel))
    }

    fn options(&self, vars: &[(&str, &str)]) -> LaunchOptions {
        let mut vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        vars.insert(
            "PATH".to_string(),
            self.root.path().join("path").into_os_string(),
        );

        let mut options = LaunchOptions::from_lookup(Platform::Posix, |key| vars.get(key).cloned());
        options.home_dir = Some(self.home());
        options.cwd = self.root.path().to_path_buf();
        options
    }
}

fn make_executable(path: &Path) -> PathBuf {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_path_buf()
}

/// Counts calls and optionally drops a binary where the real installer would.
struct FakeInstaller {
    calls: Cell<usize>,
    installs_to: Option<PathBuf>,
}

impl FakeInstaller {
    fn new(installs_to: Option<PathBuf>) -> Self {
        Self {
            calls: Cell::new(0),
            installs_to,
        }
    }
}

impl Installer for FakeInstaller {
    async fn install(&self, _options: &LaunchOptions) -> Result<(), InstallError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(path) = &self.installs_to {
            make_executable(path);
        }
        Ok(())
    }
}

/// Runs a real subprocess that exits with a fixed status.
struct ExitingInstaller(i32);

impl Installer for ExitingInstaller {
    async fn install(&self, _options: &LaunchOptions) -> Result<(), InstallError> {
        let script = format!("exit {}", self.0);
        let command = InstallCommand {
            program: PathBuf::from("sh"),
            args: vec!["-c".to_string(), script.clone()],
            env_vars: vec![],
            raw_command: script,
        };
        run_install_command(&command, &InstallOptions::default()).await
    }
}

fn args(values: &[&str]) -> Vec<OsString> {
    values.iter().map(OsString::from).collect()
}

#[tokio::test(flavor = "current_thread")]
async fn test_found_binary_skips_installer() {
    let sandbox = Sandbox::new();
    let on_path = sandbox.executable("path/seashail");
    let installer = FakeInstaller::new(None);

    let plan = prepare(&sandbox.options(&[]), vec![], &installer)
        .await
        .unwrap();

    assert_eq!(plan.program, on_path);
    assert_eq!(installer.calls.get(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn test_override_beats_search_path_and_well_known() {
    let sandbox = Sandbox::new();
    let custom = sandbox.executable("opt/seashail-nightly");
    sandbox.executable("path/seashail");
    sandbox.executable("home/.local/bin/seashail");

    let options = sandbox.options(&[("SEASHAIL_BIN", custom.to_str().unwrap())]);
    let found = resolve(&options).unwrap();

    assert_eq!(found.path, custom);
    assert_eq!(found.source, ResolutionSource::Override);
}

#[tokio::test(flavor = "current_thread")]
async fn test_passthrough_args_follow_subcommand_in_order() {
    let sandbox = Sandbox::new();
    sandbox.executable("path/seashail");

    let plan = prepare(
        &sandbox.options(&[]),
        args(&["--", "--network", "testnet", "--verbose"]),
        &FakeInstaller::new(None),
    )
    .await
    .unwrap();

    assert_eq!(
        plan.args,
        args(&["mcp", "--", "--network", "testnet", "--verbose"])
    );
}

#[tokio::test(flavor = "current_thread")]
async fn test_auto_upgrade_defaulted_when_unset() {
    let sandbox = Sandbox::new();
    sandbox.executable("path/seashail");

    let plan = prepare(&sandbox.options(&[]), vec![], &FakeInstaller::new(None))
        .await
        .unwrap();

    assert_eq!(
        plan.env_vars,
        vec![(AUTO_UPGRADE_ENV.to_string(), "1".to_string())]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn test_auto_upgrade_explicit_disable_preserved() {
    let sandbox = Sandbox::new();
    sandbox.executable("path/seashail");

    let plan = prepare(
        &sandbox.options(&[(AUTO_UPGRADE_ENV, "0")]),
        vec![],
        &FakeInstaller::new(None),
    )
    .await
    .unwrap();

    assert!(plan.env_vars.is_empty());
    assert!(plan.command().get_envs().next().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn test_install_then_resolve_well_known() {
    let sandbox = Sandbox::new();
    let target = sandbox.home().join(".local/bin/seashail");
    let installer = FakeInstaller::new(Some(target.clone()));

    let plan = prepare(&sandbox.options(&[]), args(&["--x"]), &installer)
        .await
        .unwrap();

    assert_eq!(installer.calls.get(), 1);
    assert_eq!(plan.program, target);
    assert_eq!(plan.args, args(&["mcp", "--x"]));
}

#[tokio::test(flavor = "current_thread")]
async fn test_missing_after_install_fails_without_second_install() {
    let sandbox = Sandbox::new();
    let installer = FakeInstaller::new(None);

    let err = prepare(&sandbox.options(&[]), vec![], &installer)
        .await
        .unwrap_err();

    assert!(matches!(err, LaunchError::NotFoundAfterInstall { .. }));
    assert!(err.to_string().contains("after install"));
    assert_eq!(installer.calls.get(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn test_installer_exit_status_surfaces() {
    let sandbox = Sandbox::new();

    let err = prepare(&sandbox.options(&[]), vec![], &ExitingInstaller(17))
        .await
        .unwrap_err();

    assert!(matches!(err, LaunchError::Install(_)));
    assert!(
        err.to_string().contains("17"),
        "error should mention the exit status: {}",
        err
    );
}
