//! Release branch detection and the matching svn library location.

use crate::constants::{BRANCH_PREFIX, SVN_LIB_SUBPATH};
use regex::Regex;
use std::sync::LazyLock;

static RELEASE_BRANCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}-v(.*)-release$", regex::escape(BRANCH_PREFIX)))
        .expect("release branch pattern is valid")
});

/// Whether the checkout follows development or is pinned to a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Release {
    Development,
    Tagged { version: String },
}

impl Release {
    /// Classifies a branch name such as `blender-v3.6-release`.
    /// The version is taken verbatim from between `-v` and `-release`.
    pub fn from_branch(branch: &str) -> Self {
        match RELEASE_BRANCH.captures(branch) {
            Some(caps) => Release::Tagged {
                version: caps[1].to_string(),
            },
            None => Release::Development,
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            Release::Development => None,
            Release::Tagged { version } => Some(version.as_str()),
        }
    }

    #[must_use]
    pub fn is_release(&self) -> bool {
        matches!(self, Release::Tagged { .. })
    }

    /// Svn branch or tag path holding the libraries for this checkout.
    pub fn svn_branch(&self) -> String {
        match self {
            Release::Development => "trunk".to_string(),
            Release::Tagged { version } => format!("tags/{}-{}-release", BRANCH_PREFIX, version),
        }
    }

    /// Full library URL under `base_url`, ending in `/`.
    pub fn library_url(&self, base_url: &str) -> String {
        format!("{}{}/{}/", base_url, self.svn_branch(), SVN_LIB_SUBPATH)
    }
}
