//! The user's home directory and `~` expansion.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the user's home directory.
pub const HOME_ENV: &str = "HOME";

/// Value of `HOME`, ignoring an empty one.
pub fn home_dir() -> Option<OsString> {
    env::var_os(HOME_ENV).filter(|home| !home.is_empty())
}

/// Replace a leading `~` in `raw` with `home`.
///
/// Everything after the `~` is appended verbatim, so `~/src` becomes
/// `$HOME/src`. Without a home directory `raw` is returned unchanged.
pub fn expand_tilde(raw: &str, home: Option<OsString>) -> PathBuf {
    match (raw.strip_prefix('~'), home) {
        (Some(rest), Some(home)) => {
            let mut expanded = home;
            expanded.push(rest);
            PathBuf::from(expanded)
        }
        _ => PathBuf::from(raw),
    }
}
