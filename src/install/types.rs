//! Type definitions for installer commands.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A structured installer command for programmatic execution.
///
/// `raw_command` is the pipeline handed to the interpreter, kept separately
/// for logs and error messages.
///
/// # Example
///
/// ```rust
/// use seashail_mcp::InstallCommand;
/// use std::path::PathBuf;
///
/// let cmd = InstallCommand {
///     program: PathBuf::from("sh"),
///     args: vec!["-c".to_string(), "curl -fsSL https://seashail.com/install | sh".to_string()],
///     env_vars: vec![],
///     raw_command: "curl -fsSL https://seashail.com/install | sh".to_string(),
/// };
/// assert_eq!(cmd.args[0], "-c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallCommand {
    /// The interpreter to execute (e.g., `sh`, or a resolved `pwsh` path).
    pub program: PathBuf,

    /// Arguments to pass to the interpreter.
    pub args: Vec<String>,

    /// Environment variables to add before execution (key, value pairs).
    pub env_vars: Vec<(String, String)>,

    /// The fetch-and-run pipeline, for display.
    pub raw_command: String,
}

impl InstallCommand {
    /// Return a copy with extra environment variables appended.
    pub fn with_env(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env_vars.extend(vars);
        self
    }
}
