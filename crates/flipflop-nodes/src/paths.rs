use std::path::PathBuf;

use crate::{Error, Result};

pub const DATA_DIR_ENV: &str = "FLIPFLOP_PATH";

/// Directory holding the group positioner file.
///
/// `--data-dir` wins, then a non-empty `FLIPFLOP_PATH`, then
/// `<system data dir>/flipflop`, then `~/.flipflop`. A leading `~` is
/// expanded in the first two.
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    let from_env = std::env::var(DATA_DIR_ENV).ok().filter(|v| !v.is_empty());
    if let Some(path) = explicit_path.map(str::to_string).or(from_env) {
        return Ok(expand_tilde(&path));
    }

    dirs::data_dir()
        .map(|dir| dir.join("flipflop"))
        .or_else(|| dirs::home_dir().map(|home| home.join(".flipflop")))
        .ok_or_else(|| {
            Error::Config(format!(
                "no data directory available; pass --data-dir or set {}",
                DATA_DIR_ENV
            ))
        })
}

/// `~` and `~/rest` point into the home directory; other paths are returned as given.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) => match rest.strip_prefix('/') {
            Some(rest) => rest,
            None => return PathBuf::from(path),
        },
        None => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
