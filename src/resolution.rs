//! Resolution result types.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where a resolved binary was found.
///
/// Sources are listed in lookup precedence order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResolutionSource {
    /// The path named by `SEASHAIL_BIN`.
    Override,
    /// The first match on the search path.
    SearchPath,
    /// One of the well-known install directories under the home directory.
    WellKnown,
}

/// A validated executable location.
///
/// # Example
///
/// ```rust
/// use seashail_mcp::{Resolution, ResolutionSource};
/// use std::path::PathBuf;
///
/// let found = Resolution {
///     path: PathBuf::from("/usr/local/bin/seashail"),
///     source: ResolutionSource::SearchPath,
/// };
/// assert_eq!(found.source.to_string(), "search_path");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Path to the executable.
    pub path: PathBuf,

    /// Which lookup step produced `path`.
    pub source: ResolutionSource,
}

impl Resolution {
    /// Path to the executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Convert into the bare path.
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
