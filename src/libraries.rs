//! Precompiled library and test-data synchronization from svn.

use crate::command::CommandRunner;
use crate::config::Config;
use crate::constants::SVN_DIR;
use crate::error::{Result, UpdateError};
use crate::platform::LibPlatform;
use crate::release::Release;
use crate::svn;
use crate::update::{Stage, UpdateCallbacks};
use std::path::{Path, PathBuf};

/// A library directory that is an svn working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDir {
    pub name: String,
    pub path: PathBuf,
}

fn has_svn_dir(path: &Path) -> bool {
    path.join(SVN_DIR).exists()
}

/// Lists working copies directly under `lib_dir`, sorted by name.
///
/// A directory counts when it has its own `.svn`, or when `lib_dir` itself is
/// a working copy. A missing `lib_dir` yields nothing.
pub fn find_library_dirs(lib_dir: &Path) -> Result<Vec<LibraryDir>> {
    if !lib_dir.is_dir() {
        return Ok(Vec::new());
    }

    let read_dir_error = |source| UpdateError::ReadDir {
        path: lib_dir.to_path_buf(),
        source,
    };
    let root_tracked = has_svn_dir(lib_dir);

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(lib_dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        // A URL can't be built from a non UTF-8 name.
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name == SVN_DIR {
            continue;
        }

        let path = entry.path();
        if path.is_dir() && (root_tracked || has_svn_dir(&path)) {
            dirs.push(LibraryDir { name, path });
        }
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(dirs)
}

/// Checks out the platform libraries if missing, then cleans up, switches and
/// updates every library working copy to the branch matching `release`.
pub fn sync<R, C>(
    config: &Config,
    release: &Release,
    platform: LibPlatform,
    runner: &R,
    callbacks: &C,
) -> Result<()>
where
    R: CommandRunner + ?Sized,
    C: UpdateCallbacks + ?Sized,
{
    let lib_dir = config.lib_dir();
    let svn_url = release.library_url(&config.svn_base_url);

    if let Some(platform_name) = platform.library_dir_name() {
        let platform_dir = lib_dir.join(platform_name);
        if !platform_dir.exists() {
            callbacks.on_stage(&Stage::CheckingOutLibraries);
            let platform_url = format!("{}{}", svn_url, platform_name);
            svn::checkout(runner, config, &platform_url, &platform_dir)?;
        }
    }

    callbacks.on_stage(&Stage::UpdatingLibraries);

    for dir in find_library_dirs(&lib_dir)? {
        let dir_url = format!("{}{}", svn_url, dir.name);
        svn::cleanup(runner, config, &dir.path)?;
        svn::switch(runner, config, &dir_url, &dir.path)?;
        svn::update(runner, config, &dir.path)?;
    }

    Ok(())
}
