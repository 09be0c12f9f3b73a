//! Launch configuration read from the environment.
//!
//! This module provides the [`LaunchOptions`] struct, a snapshot of every
//! environment variable the launcher consults. It is read once at startup;
//! resolution and installation only ever look at the snapshot.

use crate::Platform;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Absolute path to the binary, skipping all other lookups when valid.
pub const BIN_ENV: &str = "SEASHAIL_BIN";

/// Overrides the installer script URL.
pub const INSTALL_URL_ENV: &str = "SEASHAIL_INSTALL_URL";

/// Auto-upgrade toggle consumed by the launched binary.
pub const AUTO_UPGRADE_ENV: &str = "SEASHAIL_AUTO_UPGRADE";

/// Value given to [`AUTO_UPGRADE_ENV`] when the user left it unset.
pub const AUTO_UPGRADE_DEFAULT: &str = "1";

/// Optional installer timeout, in whole seconds.
///
/// On expiry only the direct interpreter child (`sh` or PowerShell) is
/// killed. Processes it started, such as the `curl | sh` pipeline, may keep
/// running and finish the install after the launcher has given up.
pub const INSTALL_TIMEOUT_ENV: &str = "SEASHAIL_INSTALL_TIMEOUT_SECONDS";

/// Log filter directive for the launcher itself.
pub const LOG_ENV: &str = "SEASHAIL_MCP_LOG";

/// Configuration snapshot for a single launch.
///
/// # Example
///
/// ```rust
/// use seashail_mcp::{LaunchOptions, Platform};
/// use std::collections::HashMap;
/// use std::ffi::OsString;
///
/// let vars: HashMap<&str, OsString> =
///     HashMap::from([("SEASHAIL_INSTALL_URL", OsString::from("https://mirror.test/install"))]);
/// let opts = LaunchOptions::from_lookup(Platform::Posix, |key| vars.get(key).cloned());
///
/// assert_eq!(opts.install_url(), "https://mirror.test/install");
/// assert_eq!(opts.binary_override, None);
/// ```
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Platform family driving candidate names and installer transport.
    pub platform: Platform,

    /// Value of `SEASHAIL_BIN`, if set and non-empty.
    pub binary_override: Option<PathBuf>,

    /// Value of `PATH` used for executable lookups.
    ///
    /// Falls back to [`Platform::default_search_path`] when `PATH` is unset.
    /// An empty `PATH` stays empty.
    pub search_path: Option<OsString>,

    /// User home directory holding the well-known install locations.
    pub home_dir: Option<PathBuf>,

    /// Directory relative `PATH` entries are resolved against.
    pub cwd: PathBuf,

    /// Value of `SEASHAIL_INSTALL_URL`, if set and non-empty.
    pub install_url: Option<String>,

    /// Value of `SEASHAIL_AUTO_UPGRADE` as the user left it.
    ///
    /// `Some` even when empty: only a fully absent variable is defaulted.
    pub auto_upgrade: Option<OsString>,

    /// Upper bound on the installer subprocess, see [`INSTALL_TIMEOUT_ENV`].
    ///
    /// Default: `None` (wait indefinitely)
    pub install_timeout: Option<Duration>,
}

impl LaunchOptions {
    /// Snapshot the current process environment.
    pub fn from_env() -> Self {
        Self {
            home_dir: home::home_dir(),
            cwd: std::env::current_dir().unwrap_or_default(),
            ..Self::from_lookup(Platform::current(), |key| std::env::var_os(key))
        }
    }

    /// Build options from an arbitrary variable lookup.
    ///
    /// `home_dir` is left unset and `cwd` empty; callers that need them fill
    /// them in afterwards.
    pub fn from_lookup<F>(platform: Platform, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            platform,
            binary_override: non_empty(BIN_ENV).map(PathBuf::from),
            search_path: lookup("PATH")
                .or_else(|| Some(OsString::from(platform.default_search_path()))),
            home_dir: None,
            cwd: PathBuf::new(),
            install_url: non_empty(INSTALL_URL_ENV).map(|v| v.to_string_lossy().into_owned()),
            auto_upgrade: lookup(AUTO_UPGRADE_ENV),
            install_timeout: non_empty(INSTALL_TIMEOUT_ENV).and_then(|v| parse_timeout(&v)),
        }
    }

    /// Installer URL: the override if present, else the platform default.
    pub fn install_url(&self) -> &str {
        self.install_url
            .as_deref()
            .unwrap_or_else(|| self.platform.default_install_url())
    }

    /// Variables to add to child processes.
    ///
    /// Defaults [`AUTO_UPGRADE_ENV`] to [`AUTO_UPGRADE_DEFAULT`] when it was
    /// absent. A user-supplied value (including `0`) is inherited untouched.
    pub fn child_env(&self) -> Vec<(String, String)> {
        if self.auto_upgrade.is_some() {
            return Vec::new();
        }
        vec![(
            AUTO_UPGRADE_ENV.to_string(),
            AUTO_UPGRADE_DEFAULT.to_string(),
        )]
    }
}

fn parse_timeout(raw: &std::ffi::OsStr) -> Option<Duration> {
    match raw.to_str().map(str::trim).map(str::parse::<u64>) {
        Some(Ok(secs)) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            tracing::warn!(
                value = %raw.to_string_lossy(),
                "ignoring invalid {INSTALL_TIMEOUT_ENV}"
            );
            None
        }
    }
}
