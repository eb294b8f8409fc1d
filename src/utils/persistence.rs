//! Generic JSON persistence helpers for ~/.arcade/ record files.

use crate::core::constants::{DATA_DIR_ENV, DATA_DIR_NAME};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolve the data directory, creating it if needed.
///
/// Precedence: explicit override, then `ARCADE_DATA_DIR`, then `~/.arcade/`.
pub fn data_dir(override_dir: Option<&Path>) -> io::Result<PathBuf> {
    let dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => {
                let home_dir = dirs::home_dir().ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        "Could not determine home directory",
                    )
                })?;
                home_dir.join(DATA_DIR_NAME)
            }
        },
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON, replacing any previous contents.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}
