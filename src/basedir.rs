use std::{env, fs, io, path::PathBuf};

/// Environment override for the cache directory.
pub const BASE_DIR_ENV: &str = "TRAIN_OPS_BASE_DIR";

/// Directory for training intermediates, colocated with other cached data
/// under `~/.cache` unless overridden. Created on first use.
pub fn base_dir() -> io::Result<PathBuf> {
    let dir = match env::var(BASE_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home_dir()?.join(".cache").join("train-ops"),
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn home_dir() -> io::Result<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "HOME is not set"))
}
