//! The update flow: release detection, libraries, then the repository.
//!
//! Steps run strictly in order and the first error ends the run.

use crate::command::CommandRunner;
use crate::config::Config;
use crate::error::Result;
use crate::git;
use crate::libraries;
use crate::platform::LibPlatform;
use crate::release::Release;
use crate::repo;

/// Major stages announced with a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CheckingOutLibraries,
    UpdatingLibraries,
    UpdatingRepository,
}

impl Stage {
    pub fn banner(&self) -> &'static str {
        match self {
            Stage::CheckingOutLibraries => "Checking out Precompiled Libraries",
            Stage::UpdatingLibraries => "Updating Precompiled Libraries and Tests",
            Stage::UpdatingRepository => "Updating Blender Git Repository and Submodules",
        }
    }
}

/// Progress notifications emitted by the update flow.
pub trait UpdateCallbacks {
    /// The checkout is on a release branch for `version`.
    fn on_release(&self, version: &str);
    fn on_stage(&self, stage: &Stage);
}

/// Reads the current branch and classifies it.
pub fn detect_release<R, C>(config: &Config, runner: &R, callbacks: &C) -> Result<Release>
where
    R: CommandRunner + ?Sized,
    C: UpdateCallbacks + ?Sized,
{
    let branch = git::get_current_branch(runner, config)?;
    let release = Release::from_branch(&branch);
    if let Some(version) = release.version() {
        callbacks.on_release(version);
    }
    Ok(release)
}

/// Runs the whole update and returns how the checkout was classified.
pub fn run<R, C>(config: &Config, platform: LibPlatform, runner: &R, callbacks: &C) -> Result<Release>
where
    R: CommandRunner + ?Sized,
    C: UpdateCallbacks + ?Sized,
{
    let release = detect_release(config, runner, callbacks)?;

    if !config.only_code {
        libraries::sync(config, &release, platform, runner, callbacks)?;
    }

    repo::update(config, &release, runner, callbacks)?;

    Ok(release)
}
