use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Environment variable holding the executable search path.
pub const PATH_ENV: &str = "PATH";

/// Locate `name` using the current value of `PATH`.
///
/// `PATH` is read on every call so changes made while the shell runs are
/// picked up. An unset or empty `PATH` finds nothing.
pub fn resolve(name: &str) -> Option<PathBuf> {
    let path_env = env::var_os(PATH_ENV).unwrap_or_default();
    resolve_in(&path_env, name)
}

/// Locate `name` in the directories listed in `search_path`, first match wins.
///
/// Only existence is checked: directories, non-executable files and symbolic
/// links all count as a match. Every name, including one containing `/`, is
/// joined onto each directory in turn.
pub fn resolve_in(search_path: &OsStr, name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    if search_path.is_empty() {
        return None;
    }

    // Split PATH on the platform separator, preserving order
    for dir in env::split_paths(search_path) {
        let candidate = dir.join(name);
        if candidate.exists() {
            tracing::debug!(name, path = %candidate.display(), "resolved command");
            return Some(candidate);
        }
    }

    tracing::debug!(name, "command not found on search path");
    None
}

/// List the names of entries in every search path directory that start with `prefix`.
pub fn names_with_prefix(prefix: &str) -> Vec<String> {
    let Some(path_env) = env::var_os(PATH_ENV) else {
        return Vec::new();
    };

    let mut names: Vec<String> = env::split_paths(&path_env)
        .filter_map(|dir| dir.read_dir().ok())
        .flat_map(|entries| entries.filter_map(Result::ok))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(prefix))
        .collect();
    names.sort();
    names.dedup();
    names
}
