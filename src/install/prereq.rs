//! Interpreter lookup for the Windows installer.

use crate::detection::find_executable;
use crate::InstallError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// PowerShell interpreters in preference order: cross-platform first.
const POWERSHELL_CANDIDATES: [&str; 2] = ["pwsh", "powershell"];

/// Locate a PowerShell interpreter on `search_path`.
///
/// Prefers `pwsh` and falls back to Windows PowerShell. Fails with
/// [`InstallError::MissingDependency`] when neither is present.
///
/// # Example
///
/// ```rust,no_run
/// use seashail_mcp::resolve_powershell;
///
/// let path = std::env::var_os("PATH");
/// let cwd = std::env::current_dir().unwrap_or_default();
/// match resolve_powershell(path.as_deref(), &cwd) {
///     Ok(ps) => println!("using {:?}", ps),
///     Err(e) => eprintln!("{}: {}", e, e.fix_suggestion()),
/// }
/// ```
pub fn resolve_powershell(search_path: Option<&OsStr>, cwd: &Path) -> Result<PathBuf, InstallError> {
    POWERSHELL_CANDIDATES
        .iter()
        .find_map(|name| find_executable(name, search_path, cwd))
        .ok_or_else(|| InstallError::MissingDependency {
            name: "powershell (or pwsh)".to_string(),
            fix: "Install PowerShell from https://aka.ms/powershell, or install seashail manually and set SEASHAIL_BIN"
                .to_string(),
        })
}
