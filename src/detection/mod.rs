//! Detection implementation submodule.
//!
//! This module contains the filesystem probes behind [`crate::resolve`]:
//!
//! - `find_executable`: search-path lookup against a configured `PATH`
//! - `executable_candidate`: "exists and is executable" check for a single path

mod path_finder;

pub(crate) use path_finder::{executable_candidate, find_executable};
