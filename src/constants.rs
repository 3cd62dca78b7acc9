//! Application-wide constants.
//!
//! Names and locations shared by the Blender checkout and the svn library
//! repository.

/// Token every release branch and release tag starts with.
pub const BRANCH_PREFIX: &str = "blender";

/// Default artifact repository root.
const DEFAULT_SVN_BASE_URL: &str = "https://svn.blender.org/svnroot/bf-blender/";

/// Returns the artifact repository root URL, always ending in `/`.
///
/// Can be customized via the MAKE_UPDATE_SVN_URL environment variable, e.g. to
/// point at a mirror.
///
/// Example: `MAKE_UPDATE_SVN_URL=https://mirror.example.org/bf-blender make-update`
pub fn svn_base_url() -> String {
    std::env::var("MAKE_UPDATE_SVN_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize_base_url(&s))
        .unwrap_or_else(|| DEFAULT_SVN_BASE_URL.to_string())
}

fn normalize_base_url(url: &str) -> String {
    let url = url.trim();
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

pub const DEFAULT_GIT_COMMAND: &str = "git";
pub const DEFAULT_SVN_COMMAND: &str = "svn";

/// Program `git submodule foreach` runs inside each submodule.
pub const SUBMODULE_GIT_PROGRAM: &str = "git";

/// Libraries live next to the source checkout, in `../lib`.
pub const LIB_DIR: &str = "lib";

/// Subpath of a trunk or tag holding the library trees.
pub const SVN_LIB_SUBPATH: &str = "lib";

/// Svn metadata directory used to detect working copies.
pub const SVN_DIR: &str = ".svn";

/// Development branch tracked by submodules outside release checkouts.
pub const DEVELOPMENT_BRANCH: &str = "master";
pub const DEFAULT_REMOTE: &str = "origin";

/// Spinner tick interval in milliseconds.
pub const PROGRESS_TICK_MS: u64 = 80;
