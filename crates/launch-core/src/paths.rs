use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::LaunchError;
use crate::variant::Variant;

/// Directory holding the running launcher, with symlinks resolved.
pub fn script_dir() -> Result<PathBuf, LaunchError> {
    let exe = std::env::current_exe().map_err(LaunchError::CurrentExe)?;
    script_dir_of(&exe)
}

/// Directory holding `launcher` once every symlink on the way is resolved.
pub fn script_dir_of(launcher: &Path) -> Result<PathBuf, LaunchError> {
    let resolved = fs::canonicalize(launcher).map_err(|source| LaunchError::ScriptDir {
        path: launcher.to_path_buf(),
        source,
    })?;
    match resolved.parent() {
        Some(parent) => Ok(parent.to_path_buf()),
        None => Ok(resolved),
    }
}

/// Makes a configured scripts directory absolute. Existing directories are
/// canonicalized; missing ones are joined onto the working directory as-is.
pub fn resolve_dir(dir: &Path) -> Result<PathBuf, LaunchError> {
    if let Ok(resolved) = fs::canonicalize(dir) {
        return Ok(resolved);
    }
    std::path::absolute(dir).map_err(|source| LaunchError::ScriptDir {
        path: dir.to_path_buf(),
        source,
    })
}

pub fn companion_script_path(dir: &Path, variant: Variant) -> PathBuf {
    dir.join(variant.companion_file_name())
}
