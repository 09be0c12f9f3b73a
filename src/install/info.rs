//! Installer command construction for each platform.
//!
//! Both transports fetch a script over HTTPS and pipe it into an
//! interpreter. Nothing is verified beyond what the transport provides.

use super::InstallCommand;
use std::path::PathBuf;

/// `curl -fsSL <url> | sh`, run through `sh -c`.
pub(crate) fn posix_install_command(url: &str) -> InstallCommand {
    let raw_command = format!("curl -fsSL {url} | sh");
    InstallCommand {
        program: PathBuf::from("sh"),
        args: vec!["-c".to_string(), raw_command.clone()],
        env_vars: vec![],
        raw_command,
    }
}

/// `irm <url> | iex`, run through PowerShell without profile or execution
/// policy restrictions.
pub(crate) fn windows_install_command(powershell: PathBuf, url: &str) -> InstallCommand {
    let raw_command = format!("irm {url} | iex");
    InstallCommand {
        program: powershell,
        args: vec![
            "-NoProfile".to_string(),
            "-ExecutionPolicy".to_string(),
            "Bypass".to_string(),
            "-Command".to_string(),
            raw_command.clone(),
        ],
        env_vars: vec![],
        raw_command,
    }
}
