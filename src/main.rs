//! `seashail-mcp`: install seashail if needed, then exec `seashail mcp`.

use seashail_mcp::{prepare, LaunchOptions, ScriptInstaller, LOG_ENV};
use std::ffi::OsString;
use std::fmt::Display;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    // Forwarded as-is, including any leading `--`.
    let passthrough: Vec<OsString> = std::env::args_os().skip(1).collect();
    let options = LaunchOptions::from_env();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => return fail(&e, "Check system resources and try again"),
    };

    let plan = match runtime.block_on(prepare(&options, passthrough, &ScriptInstaller)) {
        Ok(plan) => plan,
        Err(e) => return fail(&e, e.fix_suggestion()),
    };
    drop(runtime);

    let err = plan.exec();
    fail(&err, err.fix_suggestion())
}

/// Log to stderr only: stdout carries the MCP stdio stream.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(error: &dyn Display, fix: &str) -> ExitCode {
    eprintln!("seashail-mcp: {error}");
    eprintln!("  fix: {fix}");
    ExitCode::FAILURE
}
