//! Binary resolution.

use crate::detection::{executable_candidate, find_executable};
use crate::platform::BINARY_NAME;
use crate::{LaunchOptions, Resolution, ResolutionSource};

/// Locate an installed `seashail` binary.
///
/// Lookup order, first hit wins:
///
/// 1. `SEASHAIL_BIN`, if it names an existing file the current user may
///    execute (relative values are taken against the working directory)
/// 2. The first `seashail` on the configured search path
/// 3. `~/.local/bin/seashail`, then `~/.cargo/bin/seashail`
///    (`seashail.exe` on Windows)
///
/// Filesystem errors are treated as "not found". The function has no side
/// effects, so calling it again after an install is safe.
///
/// # Example
///
/// ```rust,no_run
/// use seashail_mcp::{resolve, LaunchOptions};
///
/// let options = LaunchOptions::from_env();
/// match resolve(&options) {
///     Some(found) => println!("seashail at {:?} ({})", found.path, found.source),
///     None => println!("seashail is not installed"),
/// }
/// ```
pub fn resolve(options: &LaunchOptions) -> Option<Resolution> {
    if let Some(path) = &options.binary_override {
        if let Some(path) = executable_candidate(path, &options.cwd) {
            return Some(Resolution {
                path,
                source: ResolutionSource::Override,
            });
        }
        tracing::debug!(path = %path.display(), "override is not an executable file, ignoring");
    }

    if let Some(path) = find_executable(BINARY_NAME, options.search_path.as_deref(), &options.cwd)
    {
        return Some(Resolution {
            path,
            source: ResolutionSource::SearchPath,
        });
    }

    let home = options.home_dir.as_deref()?;
    options
        .platform
        .well_known_candidates(home)
        .iter()
        .find_map(|candidate| executable_candidate(candidate, &options.cwd))
        .map(|path| Resolution {
            path,
            source: ResolutionSource::WellKnown,
        })
}
