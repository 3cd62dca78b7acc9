//! Svn command wrappers for the library working copies.

use crate::command::{CommandLine, CommandRunner};
use crate::config::Config;
use crate::error::Result;
use std::path::Path;

fn svn(config: &Config, subcommand: &str) -> CommandLine {
    CommandLine::new(config.svn_command.as_str())
        .arg(subcommand)
        .current_dir(&config.source_dir)
}

pub fn checkout<R>(runner: &R, config: &Config, url: &str, path: &Path) -> Result<()>
where
    R: CommandRunner + ?Sized,
{
    runner.run(&svn(config, "checkout").arg(url).arg(path))
}

pub fn cleanup<R>(runner: &R, config: &Config, path: &Path) -> Result<()>
where
    R: CommandRunner + ?Sized,
{
    runner.run(&svn(config, "cleanup").arg(path))
}

pub fn switch<R>(runner: &R, config: &Config, url: &str, path: &Path) -> Result<()>
where
    R: CommandRunner + ?Sized,
{
    runner.run(&svn(config, "switch").arg(url).arg(path))
}

pub fn update<R>(runner: &R, config: &Config, path: &Path) -> Result<()>
where
    R: CommandRunner + ?Sized,
{
    runner.run(&svn(config, "update").arg(path))
}
