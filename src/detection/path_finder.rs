//! Search-path lookup and executable checks.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Find an executable by name on the given search path.
///
/// Uses `which::which_in` so the lookup only consults `search_path`, never
/// the live process environment. Returns `None` on any lookup error.
pub(crate) fn find_executable(
    name: &str,
    search_path: Option<&OsStr>,
    cwd: &Path,
) -> Option<PathBuf> {
    let search_path = search_path?;
    which::which_in(name, Some(search_path), cwd).ok()
}

/// Check a single candidate path the way the search-path lookup does.
///
/// Relative paths are taken against `cwd`. The candidate must be a regular
/// file the current user may execute (`access(X_OK)` on Unix), so a file
/// with execute bits for someone else only is rejected. Any error counts as
/// "not executable".
pub(crate) fn executable_candidate(path: &Path, cwd: &Path) -> Option<PathBuf> {
    which::which_in(cwd.join(path), None::<&OsStr>, cwd).ok()
}
