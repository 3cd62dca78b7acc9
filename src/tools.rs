//! Checks that git and svn can be found before anything runs.

use crate::config::Config;
use crate::error::{Result, UpdateError};
use std::path::{Path, PathBuf};

/// Resolves `name` the way a shell would: directly if it contains a path
/// separator, otherwise through each `PATH` entry.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let candidate = Path::new(name);
    if candidate.components().count() > 1 || candidate.is_absolute() {
        return with_extensions(candidate).into_iter().find(|p| is_executable(p));
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| with_extensions(&dir.join(name)))
        .find(|p| is_executable(p))
}

/// Fails with the first missing tool. Svn is only required when libraries
/// will be updated.
pub fn check_tools(config: &Config) -> Result<()> {
    if find_executable(&config.git_command).is_none() {
        return Err(UpdateError::ToolMissing {
            tool: config.git_command.clone(),
            purpose: "code",
        });
    }

    if !config.only_code && find_executable(&config.svn_command).is_none() {
        return Err(UpdateError::ToolMissing {
            tool: config.svn_command.clone(),
            purpose: "libraries",
        });
    }

    Ok(())
}

#[cfg(windows)]
fn with_extensions(path: &Path) -> Vec<PathBuf> {
    use std::ffi::OsString;

    if path.extension().is_some() {
        return vec![path.to_path_buf()];
    }
    let exts = std::env::var_os("PATHEXT")
        .unwrap_or_else(|| OsString::from(".COM;.EXE;.BAT;.CMD"));
    let mut candidates = vec![path.to_path_buf()];
    for ext in exts.to_string_lossy().split(';').filter(|e| !e.is_empty()) {
        let mut with_ext: OsString = path.as_os_str().to_owned();
        with_ext.push(ext);
        candidates.push(PathBuf::from(with_ext));
    }
    candidates
}

#[cfg(not(windows))]
fn with_extensions(path: &Path) -> Vec<PathBuf> {
    vec![path.to_path_buf()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
