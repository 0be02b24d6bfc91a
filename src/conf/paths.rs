use crate::home::{expand_tilde, home_dir};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub const CONFIG_PATH_ENV: &str = "FLINT_CONFIG";

const CONFIG_FILE_NAME: &str = ".flintrc";

/// Config file named by `FLINT_CONFIG`, else `~/.flintrc` when it exists.
pub fn resolve_config_path() -> Option<PathBuf> {
    config_path_from(env::var(CONFIG_PATH_ENV).ok(), home_dir())
}

fn config_path_from(configured: Option<String>, home: Option<OsString>) -> Option<PathBuf> {
    match configured.filter(|raw| !raw.trim().is_empty()) {
        Some(raw) => Some(expand_tilde(raw.trim(), home)),
        None => home
            .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
            .filter(|path| path.exists()),
    }
}
