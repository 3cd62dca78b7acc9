// Blender repository and submodule update

use crate::command::CommandRunner;
use crate::config::Config;
use crate::constants::{DEFAULT_REMOTE, DEVELOPMENT_BRANCH};
use crate::error::Result;
use crate::git;
use crate::release::Release;
use crate::update::{Stage, UpdateCallbacks};

/// Pulls the checkout with rebase and brings submodules to their recorded
/// commits. Development checkouts then move every submodule to the tip of
/// its development branch; release checkouts stay pinned.
pub fn update<R, C>(config: &Config, release: &Release, runner: &R, callbacks: &C) -> Result<()>
where
    R: CommandRunner + ?Sized,
    C: UpdateCallbacks + ?Sized,
{
    callbacks.on_stage(&Stage::UpdatingRepository);

    git::pull_rebase(runner, config)?;
    git::submodule_update(runner, config)?;

    if !release.is_release() {
        git::submodule_checkout(runner, config, DEVELOPMENT_BRANCH)?;
        git::submodule_pull_rebase(runner, config, DEFAULT_REMOTE, DEVELOPMENT_BRANCH)?;
    }

    Ok(())
}
