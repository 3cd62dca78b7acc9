//! Git command wrappers.
//!
//! Thin wrappers around the git CLI. Every command runs in the configured
//! source directory with the configured git executable; commands run by
//! `submodule foreach` use plain `git`.

use crate::command::{CommandLine, CommandRunner};
use crate::config::Config;
use crate::constants::SUBMODULE_GIT_PROGRAM;
use crate::error::{Result, UpdateError};

fn git(config: &Config) -> CommandLine {
    CommandLine::new(config.git_command.as_str()).current_dir(&config.source_dir)
}

pub fn get_current_branch<R>(runner: &R, config: &Config) -> Result<String>
where
    R: CommandRunner + ?Sized,
{
    runner
        .output(&git(config).args(["rev-parse", "--abbrev-ref", "HEAD"]))
        .map_err(|e| UpdateError::BranchDetection(Box::new(e)))
}

pub fn pull_rebase<R>(runner: &R, config: &Config) -> Result<()>
where
    R: CommandRunner + ?Sized,
{
    runner.run(&git(config).args(["pull", "--rebase"]))
}

pub fn submodule_update<R>(runner: &R, config: &Config) -> Result<()>
where
    R: CommandRunner + ?Sized,
{
    runner.run(&git(config).args(["submodule", "update", "--init", "--recursive"]))
}

/// Checks out `branch` in every submodule.
///
/// The inner command runs from each submodule directory, so it is always the
/// plain `git` found on `PATH`.
pub fn submodule_checkout<R>(runner: &R, config: &Config, branch: &str) -> Result<()>
where
    R: CommandRunner + ?Sized,
{
    runner.run(
        &git(config)
            .args(["submodule", "foreach"])
            .arg(SUBMODULE_GIT_PROGRAM)
            .args(["checkout", branch]),
    )
}

/// Pulls `remote`/`branch` with rebase in every submodule.
pub fn submodule_pull_rebase<R>(runner: &R, config: &Config, remote: &str, branch: &str) -> Result<()>
where
    R: CommandRunner + ?Sized,
{
    runner.run(
        &git(config)
            .args(["submodule", "foreach"])
            .arg(SUBMODULE_GIT_PROGRAM)
            .args(["pull", "--rebase", remote, branch]),
    )
}
